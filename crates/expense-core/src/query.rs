//! Query arguments and their validated filter form.

use expense_domain::{parse_date, BelongsToCategory, DateRange, Expense};

use crate::CoreResult;

/// Optional filters for [`ExpenseStore::query`](crate::ExpenseStore::query).
///
/// Dates are kept as raw strings until the query runs so that a malformed
/// bound is reported by the query itself. Only an empty string counts as
/// "not provided"; whitespace is a real value (a malformed bound, or a
/// category label stored as typed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
}

impl ExpenseQuery {
    /// A query without filters.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::all().with_start_date(start).with_end_date(end)
    }

    pub fn in_category(category: impl Into<String>) -> Self {
        Self::all().with_category(category)
    }

    pub fn with_start_date(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    pub fn with_end_date(mut self, end: impl Into<String>) -> Self {
        self.end_date = Some(end.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Parses both bounds up front; nothing is filtered if either is invalid.
    pub fn resolve(&self) -> CoreResult<ExpenseFilter> {
        let start = provided(&self.start_date).map(parse_date).transpose()?;
        let end = provided(&self.end_date).map(parse_date).transpose()?;
        Ok(ExpenseFilter {
            range: DateRange::new(start, end),
            category: provided(&self.category).map(str::to_lowercase),
        })
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.is_empty())
}

/// Validated query: an inclusive date range and a case-folded category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub range: DateRange,
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        self.range.contains(expense.date)
            && self
                .category
                .as_deref()
                .map_or(true, |needle| expense.in_category(needle))
    }
}
