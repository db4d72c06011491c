//! expense-domain
//!
//! Pure expense models (Expense, DateRange, Summary, RecordWarning).
//! No I/O, no CLI, no storage. Only data types and parsing rules.

pub mod common;
pub mod date;
pub mod expense;
pub mod summary;
pub mod warning;

pub use common::*;
pub use date::*;
pub use expense::*;
pub use summary::*;
pub use warning::*;
