//! expense-config
//!
//! Persistent user preferences for the expense tracker CLI.
//! Owns the Config data structure plus disk persistence helpers.
//! Expenses themselves are never written here.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, SummarySettings, Theme};
