//! Tracing/logging setup shared by hosts embedding the vendas domain crates.
//!
//! The domain crates themselves are pure and do not log; processes that embed
//! them call [`init`] once at startup.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
