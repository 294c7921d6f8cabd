//! Sales-order domain module (pedidos).
//!
//! This crate contains business rules for order line items and delivery
//! addresses, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). Line items are entities owned by an order aggregate (out of
//! scope here); delivery addresses are immutable value objects.

pub mod endereco;
pub mod item;
pub mod status;

pub use endereco::EnderecoEntrega;
pub use item::{ItemPedido, ProdutoId};
pub use status::{MetodoPagamento, StatusPedido};
