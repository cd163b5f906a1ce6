//! Inter-item correlation matrix and pair summary.

use crate::analysis::validate;
use crate::error::AnalysisError;
use crate::matrix::ScoreMatrix;
use crate::result::CorrelationSummary;
use crate::statistics::pearson;

/// Compute the pairwise Pearson correlation matrix for all items.
///
/// The result is symmetric with a unit diagonal. The mean/max/min summary
/// covers only the strictly-upper-triangular entries, so each unordered
/// pair contributes once and the diagonal never inflates the mean.
///
/// A zero-variance item makes its pairwise coefficients NaN without
/// failing the operation; any NaN among the distinct pairs makes the
/// summary statistics NaN as well (the summary is only meaningful over
/// fully defined coefficients).
///
/// # Errors
///
/// Propagates [`AnalysisError::InsufficientItems`] and
/// [`AnalysisError::InsufficientObservations`] from validation.
pub fn correlation_matrix(matrix: &ScoreMatrix) -> Result<CorrelationSummary, AnalysisError> {
    let data = validate(matrix)?;
    let k = data.n_items();

    let mut coefficients = vec![vec![1.0; k]; k];
    let mut upper = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let r = pearson(data.column(i), data.column(j));
            coefficients[i][j] = r;
            coefficients[j][i] = r;
            upper.push(r);
        }
    }

    let (mean, max, min) = if upper.iter().any(|r| r.is_nan()) {
        (f64::NAN, f64::NAN, f64::NAN)
    } else {
        (
            upper.iter().sum::<f64>() / upper.len() as f64,
            upper.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            upper.iter().copied().fold(f64::INFINITY, f64::min),
        )
    };

    Ok(CorrelationSummary {
        items: data.names().to_vec(),
        matrix: coefficients,
        mean,
        max,
        min,
    })
}
