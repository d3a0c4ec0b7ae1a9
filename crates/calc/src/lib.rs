//! Four-operation calculator core.
//!
//! A fixed sum type of operations matched explicitly — no dispatch
//! tables. Evaluation is total except for division by zero.

pub mod operation;

pub use operation::{CalcError, Operation};
