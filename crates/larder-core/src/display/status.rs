//! Confirmation messages for item operations.

use std::fmt;

/// Outcome line for an operation that reports a boolean result.
///
/// Store operations resolve to `false` when nothing was written or removed.
/// That is not an error, so the CLI reports it as a notice rather than a
/// failure.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a status for an operation that changed nothing.
    pub fn unchanged(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Picks the message matching the boolean an operation returned.
    pub fn from_affected(
        affected: bool,
        changed: impl Into<String>,
        unchanged: impl Into<String>,
    ) -> Self {
        if affected {
            Self::success(changed.into())
        } else {
            Self::unchanged(unchanged.into())
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Notice:" };
        writeln!(f, "{label} {}", self.message)
    }
}
