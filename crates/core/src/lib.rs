//! `vendas-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifier newtypes, the entity/value-object equality split, the domain error
//! model and guard-clause validations.

pub mod entity;
pub mod error;
pub mod guard;
pub mod id;
pub mod value_object;

pub use entity::{Entity, EntityMeta};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use value_object::ValueObject;
