use std::collections::HashMap;

use expense_domain::{CategoryGrouping, Expense, RecordWarning, Summary};
use tracing::warn;

/// Aggregates expenses into per-category totals.
pub struct SummaryService;

impl SummaryService {
    /// Sums `records` by category in iteration order.
    ///
    /// Records with a NaN or infinite amount are skipped and reported through
    /// [`Summary::warnings`]; the warning index is the record's position in
    /// `records`.
    pub fn summarize<'a>(
        records: impl IntoIterator<Item = &'a Expense>,
        grouping: CategoryGrouping,
    ) -> Summary {
        let mut summary = Summary::new();
        let mut first_seen: HashMap<String, String> = HashMap::new();

        for (index, expense) in records.into_iter().enumerate() {
            if !expense.has_real_amount() {
                warn!(index, amount = %expense.amount, "skipping expense with non-numeric amount");
                summary.skip(RecordWarning::malformed(
                    index,
                    format!("amount `{}` is not a real number", expense.amount),
                ));
                continue;
            }

            let label = match grouping {
                CategoryGrouping::Exact => expense.category.as_str(),
                CategoryGrouping::CaseInsensitive => first_seen
                    .entry(expense.category.to_lowercase())
                    .or_insert_with(|| expense.category.clone())
                    .as_str(),
            };
            summary.accumulate(label, expense.amount);
        }

        summary
    }
}
