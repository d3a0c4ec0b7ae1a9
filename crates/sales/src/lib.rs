//! Sales domain module.
//!
//! Client categories, the discount policy they drive, and the immutable
//! sale record with its pricing arithmetic. Deterministic domain logic
//! only (no IO, no terminal, no storage).

pub mod client;
pub mod sale;

pub use client::ClientCategory;
pub use sale::{RecordSale, Sale};
