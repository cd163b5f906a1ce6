//! High-level reliability analysis operations.
//!
//! Each operation takes a [`ScoreMatrix`](crate::ScoreMatrix), performs
//! its own complete-case drop (operations never share cleaned state), and
//! returns a keyed result:
//!
//! - [`cronbach_alpha`]: internal-consistency coefficient
//! - [`descriptive_statistics`]: per-item central tendency and shape
//! - [`correlation_matrix`]: pairwise Pearson coefficients with summary
//! - [`item_analysis`]: item-total and item-rest screening correlations

mod alpha;
mod correlation;
mod descriptive;
mod items;

pub use alpha::cronbach_alpha;
pub use correlation::correlation_matrix;
pub use descriptive::descriptive_statistics;
pub use items::item_analysis;

use crate::constants::{MIN_ITEMS, MIN_OBSERVATIONS};
use crate::error::AnalysisError;
use crate::matrix::{CleanedMatrix, ScoreMatrix};

/// Enforce the engine's preconditions and produce the complete-case
/// matrix the computations run on.
///
/// # Errors
///
/// - [`AnalysisError::InsufficientItems`] if the matrix has fewer than
///   two columns.
/// - [`AnalysisError::InsufficientObservations`] if fewer than two
///   complete rows remain after dropping rows with missing values.
pub fn validate(matrix: &ScoreMatrix) -> Result<CleanedMatrix, AnalysisError> {
    if matrix.n_items() < MIN_ITEMS {
        return Err(AnalysisError::InsufficientItems {
            got: matrix.n_items(),
            min: MIN_ITEMS,
        });
    }

    let cleaned = matrix.complete_cases();
    if cleaned.n_observations() < MIN_OBSERVATIONS {
        return Err(AnalysisError::InsufficientObservations {
            got: cleaned.n_observations(),
            min: MIN_OBSERVATIONS,
        });
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_single_column() {
        let m = ScoreMatrix::from_rows(&["q1"], &[vec![Some(1.0)], vec![Some(2.0)]]).unwrap();
        assert_eq!(
            validate(&m).unwrap_err(),
            AnalysisError::InsufficientItems { got: 1, min: 2 }
        );
    }

    #[test]
    fn validate_rejects_empty_matrix() {
        let m = ScoreMatrix::new();
        assert_eq!(
            validate(&m).unwrap_err(),
            AnalysisError::InsufficientItems { got: 0, min: 2 }
        );
    }

    #[test]
    fn validate_counts_complete_rows_only() {
        let m = ScoreMatrix::from_rows(
            &["q1", "q2"],
            &[
                vec![Some(1.0), Some(2.0)],
                vec![None, Some(3.0)],
                vec![Some(4.0), None],
            ],
        )
        .unwrap();
        assert_eq!(
            validate(&m).unwrap_err(),
            AnalysisError::InsufficientObservations { got: 1, min: 2 }
        );
    }

    #[test]
    fn validate_passes_through_clean_data() {
        let m = ScoreMatrix::from_rows(
            &["q1", "q2"],
            &[vec![Some(1.0), Some(2.0)], vec![Some(3.0), Some(4.0)]],
        )
        .unwrap();
        let cleaned = validate(&m).unwrap();
        assert_eq!(cleaned.n_items(), 2);
        assert_eq!(cleaned.n_observations(), 2);
    }
}
