//! Cronbach's alpha: internal-consistency reliability of an item group.
//!
//! Uses the direct variance-ratio form rather than assembling a
//! covariance matrix first:
//!
//! ```text
//! alpha = k / (k − 1) * (1 − Σ var(item_i) / var(total))
//! ```
//!
//! where k is the item count, `var` is the unbiased sample variance, and
//! `total` is each respondent's row-wise sum over all items. Computation
//! stays in full f64 precision; only the final coefficient is rounded.

use crate::analysis::validate;
use crate::constants::ALPHA_DECIMALS;
use crate::error::AnalysisError;
use crate::matrix::{CleanedMatrix, ScoreMatrix};
use crate::statistics::sample_variance;

/// Compute Cronbach's alpha for a group of items.
///
/// The matrix is cleaned to complete cases first; the coefficient is
/// rounded to 3 decimals. When the summed scores carry no variance at all
/// (every respondent has the same total), the result is 0.0, meaning no
/// measurable reliability, rather than a division-by-zero failure.
///
/// # Errors
///
/// Propagates [`AnalysisError::InsufficientItems`] and
/// [`AnalysisError::InsufficientObservations`] from validation.
pub fn cronbach_alpha(matrix: &ScoreMatrix) -> Result<f64, AnalysisError> {
    let data = validate(matrix)?;
    Ok(alpha_of(&data))
}

/// Alpha over an already-validated complete-case matrix.
pub(crate) fn alpha_of(data: &CleanedMatrix) -> f64 {
    let k = data.n_items() as f64;

    let variance_sum: f64 = (0..data.n_items())
        .map(|i| sample_variance(data.column(i)))
        .sum();
    let total_variance = sample_variance(&data.row_totals());

    if total_variance == 0.0 {
        return 0.0;
    }

    round_to(k / (k - 1.0) * (1.0 - variance_sum / total_variance), ALPHA_DECIMALS)
}

fn round_to(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (x * scale).round() / scale
}
