//! Non-fatal conditions raised while reading stored records.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A stored record was skipped; the surrounding operation still completed.
pub enum RecordWarning {
    MalformedStoredRecord { index: usize, reason: String },
}

impl RecordWarning {
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        RecordWarning::MalformedStoredRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Zero-based position of the offending record in insertion order.
    pub fn index(&self) -> usize {
        match self {
            RecordWarning::MalformedStoredRecord { index, .. } => *index,
        }
    }
}

impl fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordWarning::MalformedStoredRecord { index, reason } => write!(
                f,
                "Skipping invalid expense entry #{}: {}",
                index + 1,
                reason
            ),
        }
    }
}
