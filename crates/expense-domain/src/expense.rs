//! The expense record stored by the tracker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;
use crate::date::format_date;

/// One logged expense. Values are kept exactly as entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Returns `false` for NaN and infinite amounts, which cannot be summed.
    pub fn has_real_amount(&self) -> bool {
        self.amount.is_finite()
    }
}

impl BelongsToCategory for Expense {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!(
            "{} {} ${:.2} ({})",
            format_date(self.date),
            self.category,
            self.amount,
            self.description
        )
    }
}
