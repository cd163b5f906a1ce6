//! Error types for reliability analysis.

use std::fmt;

/// Errors that prevent a reliability computation from running at all.
///
/// These are whole-matrix precondition failures: the operation returns no
/// partial results. Per-value undefined statistics (e.g. a correlation
/// against a zero-variance item) are *not* errors; they surface as
/// `f64::NAN` inside otherwise-successful results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Fewer items (columns) than the analysis requires.
    InsufficientItems {
        /// Number of items supplied.
        got: usize,
        /// Minimum number of items required.
        min: usize,
    },

    /// Fewer complete observations than the analysis requires, after
    /// dropping rows with missing values.
    InsufficientObservations {
        /// Number of complete rows remaining.
        got: usize,
        /// Minimum number of complete rows required.
        min: usize,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InsufficientItems { got, min } => {
                write!(
                    f,
                    "reliability analysis requires at least {} items (statements), got {}",
                    min, got
                )
            }
            AnalysisError::InsufficientObservations { got, min } => {
                write!(
                    f,
                    "insufficient complete observations: got {}, need at least {} \
                     after dropping rows with missing values",
                    got, min
                )
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_counts() {
        let err = AnalysisError::InsufficientItems { got: 1, min: 2 };
        let msg = err.to_string();
        assert!(msg.contains("at least 2"), "missing minimum: {}", msg);
        assert!(msg.contains("got 1"), "missing actual count: {}", msg);

        let err = AnalysisError::InsufficientObservations { got: 0, min: 2 };
        let msg = err.to_string();
        assert!(msg.contains("got 0"), "missing actual count: {}", msg);
    }
}
