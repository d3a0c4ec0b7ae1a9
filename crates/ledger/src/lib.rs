//! In-memory inventory & sales ledger.
//!
//! The [`Ledger`] owns the product catalog and the append-only sales log,
//! assigns identifiers, and enforces the cross-table rules (stock
//! decrement on sale, referential integrity on delete). [`reports`] holds
//! the pure report generators that fold over a ledger snapshot.
//!
//! State is explicit and single-owner: callers hold a `Ledger` and pass it
//! by reference. There are no globals and no persistence; a ledger lives
//! for one process run.

pub mod ledger;
pub mod reports;

pub use ledger::Ledger;
pub use reports::{
    BrandRevenue, IncomeReport, ProductPerformance, StockStatus, TopProduct, income,
    inventory_performance, revenue_by_brand, top_products,
};
