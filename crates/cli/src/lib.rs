//! Interactive console frontends for the stockbook ledger.
//!
//! The binaries stay thin; prompting, menu dispatch and rendering live
//! here, generic over `BufRead`/`Write` so the whole interaction can be
//! driven from tests with in-memory buffers.

pub mod menu;
pub mod prompt;
pub mod seed;
pub mod view;
