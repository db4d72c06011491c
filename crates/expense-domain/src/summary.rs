//! Per-category aggregation results.

use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::warning::RecordWarning;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// How category labels are turned into summary buckets.
pub enum CategoryGrouping {
    /// One bucket per exact label; "Food" and "food" stay apart.
    #[default]
    Exact,
    /// Case variants share a bucket named after the first-seen spelling.
    CaseInsensitive,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Totals per category plus the grand total across all aggregated records.
pub struct Summary {
    pub categories: HashMap<String, f64>,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RecordWarning>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the bucket named `label` and to the grand total.
    pub fn accumulate(&mut self, label: &str, amount: f64) {
        *self.categories.entry(label.to_string()).or_insert(0.0) += amount;
        self.total += amount;
    }

    pub fn skip(&mut self, warning: RecordWarning) {
        self.warnings.push(warning);
    }

    /// `true` when no category received an amount.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_total(&self, label: &str) -> Option<f64> {
        self.categories.get(label).copied()
    }

    /// Categories ordered for display: largest amount first, ties by label.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut rows: Vec<(&str, f64)> = self
            .categories
            .iter()
            .map(|(label, amount)| (label.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        rows
    }
}
