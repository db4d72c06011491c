#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records personal expenses in memory, filters them by date
//! range or category, and summarizes spending per category behind a
//! menu-driven terminal interface.

pub mod cli;
pub mod errors;
pub mod utils;

pub use expense_config::{Config, ConfigManager};
pub use expense_core::{CoreError, ExpenseQuery, ExpenseStore, Summary};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}
