//! expense-core
//!
//! In-memory expense store with add, query and summarize operations.
//! Depends on expense-domain. No CLI, no terminal I/O, no persistence.

pub mod error;
pub mod query;
pub mod store;
pub mod summary_service;

pub use error::{CoreError, CoreResult};
pub use query::{ExpenseFilter, ExpenseQuery};
pub use store::ExpenseStore;
pub use summary_service::SummaryService;

pub use expense_domain::{
    CategoryGrouping, DateRange, Expense, RecordWarning, Summary, DATE_FORMAT,
};
