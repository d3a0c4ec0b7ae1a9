//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal
//! concerns): the error model, strongly-typed identifiers and the money
//! value object shared by the catalog, sales and ledger crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SaleId};
pub use money::Money;
pub use value_object::ValueObject;
