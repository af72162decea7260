//! Projected completion of a project.

use std::fmt;

use jiff::civil::Date;
use serde::{Serialize, Serializer};

/// Outcome of the schedule projection for one project.
///
/// Serializes as the human-readable sentence the front end prints verbatim.
///
/// ```rust
/// use taskboard_core::models::CompletionEstimate;
/// use jiff::civil::date;
///
/// let estimate = CompletionEstimate::Possible(date(2024, 3, 15));
/// assert_eq!(estimate.to_string(), "Possible completion: 2024-03-15");
/// assert_eq!(CompletionEstimate::AllCompleted.to_string(), "All tasks completed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionEstimate {
    /// Remaining work is estimated to finish on this date
    Possible(Date),
    /// Nothing is active and nothing is pending
    AllCompleted,
}

impl CompletionEstimate {
    /// The projected date, if any work remains.
    pub fn date(&self) -> Option<Date> {
        match self {
            CompletionEstimate::Possible(date) => Some(*date),
            CompletionEstimate::AllCompleted => None,
        }
    }
}

impl fmt::Display for CompletionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionEstimate::Possible(date) => {
                write!(f, "Possible completion: {}", date.strftime("%Y-%m-%d"))
            }
            CompletionEstimate::AllCompleted => f.write_str("All tasks completed"),
        }
    }
}

impl Serialize for CompletionEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
