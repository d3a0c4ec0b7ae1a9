//! Product catalog domain module.
//!
//! This crate contains the product record and catalog table business rules,
//! implemented purely as deterministic domain logic (no IO, no terminal).

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, ProductPatch, RegisterProduct, UpdateOutcome};
