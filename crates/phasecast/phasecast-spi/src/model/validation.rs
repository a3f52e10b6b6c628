//! Non-fatal validation findings.

use std::fmt;

use chrono::NaiveDate;

/// Something suspicious in the input that did not prevent forecasting.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// Several records share a date; all of them were kept
    DuplicateDate { date: NaiveDate, occurrences: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::DuplicateDate { date, occurrences } => write!(
                f,
                "duplicate date {} ({} records kept)",
                date.format("%Y-%m-%d"),
                occurrences
            ),
        }
    }
}
