//! The in-memory expense store.

use expense_domain::{parse_date, CategoryGrouping, Displayable, Expense, Summary};
use tracing::debug;

use crate::{CoreResult, ExpenseFilter, ExpenseQuery, SummaryService};

/// Owns every recorded expense in insertion order.
///
/// Records are only ever appended; readers receive shared references, so a
/// stored expense cannot change after `add` returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `date` and appends a new expense with the remaining fields as given.
    ///
    /// Fails with [`CoreError::InvalidDateFormat`](crate::CoreError::InvalidDateFormat)
    /// without touching the store when `date` is not a `YYYY-MM-DD` calendar date.
    pub fn add(
        &mut self,
        date: &str,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> CoreResult<&Expense> {
        let date = parse_date(date)?;
        let index = self.expenses.len();
        self.expenses
            .push(Expense::new(date, amount, category, description));
        let stored = &self.expenses[index];
        debug!(index, expense = %stored.display_label(), "expense recorded");
        Ok(stored)
    }

    /// Returns the stored expenses matching every provided filter, in insertion order.
    pub fn query(&self, query: &ExpenseQuery) -> CoreResult<Vec<&Expense>> {
        let filter = query.resolve()?;
        let matches = self.filter(&filter);
        debug!(
            matched = matches.len(),
            stored = self.expenses.len(),
            "expense query evaluated"
        );
        Ok(matches)
    }

    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| filter.matches(expense))
            .collect()
    }

    /// Totals every stored expense by its exact category label.
    pub fn summarize(&self) -> Summary {
        self.summarize_by(CategoryGrouping::Exact)
    }

    pub fn summarize_by(&self, grouping: CategoryGrouping) -> Summary {
        let summary = SummaryService::summarize(&self.expenses, grouping);
        debug!(
            categories = summary.categories.len(),
            skipped = summary.warnings.len(),
            ?grouping,
            "expense summary computed"
        );
        summary
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}
