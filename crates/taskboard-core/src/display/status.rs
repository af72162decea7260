//! One-line outcome messages for maintenance commands.

use std::fmt;

/// Outcome of a command that produces no data, such as `init-db`.
///
/// Failures are reported through [`crate::TrackerError`] instead.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Success:** {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let done = OperationStatus::success("Database initialized at /tmp/board.db");
        assert_eq!(
            done.to_string(),
            "**Success:** Database initialized at /tmp/board.db\n"
        );
    }
}
