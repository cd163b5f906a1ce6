//! Item-total and item-rest analysis.
//!
//! Both correlations assess how well one statement tracks the construct
//! the whole group measures. Item-total correlates an item with the sum
//! of all items (itself included); item-rest correlates it with the sum
//! of the *other* items, removing the self-inflation of the former. Both
//! are reported since analyst conventions differ.

use crate::analysis::validate;
use crate::error::AnalysisError;
use crate::matrix::ScoreMatrix;
use crate::result::{ItemAnalysis, ItemStats};
use crate::statistics::{mean, pearson, sample_std_dev};

/// Screen each item against the factor total.
///
/// A zero-variance item (or a zero-variance rest score) surfaces NaN for
/// the affected correlation only; the other items still compute, so one
/// flat column never sinks the whole analysis.
///
/// # Errors
///
/// Propagates [`AnalysisError::InsufficientItems`] and
/// [`AnalysisError::InsufficientObservations`] from validation.
pub fn item_analysis(matrix: &ScoreMatrix) -> Result<ItemAnalysis, AnalysisError> {
    let data = validate(matrix)?;
    let totals = data.row_totals();

    let items = (0..data.n_items())
        .map(|i| {
            let xs = data.column(i);
            let rest: Vec<f64> = totals.iter().zip(xs).map(|(t, x)| t - x).collect();

            ItemStats {
                item: data.name(i).to_string(),
                item_total: pearson(xs, &totals),
                item_rest: pearson(xs, &rest),
                mean: mean(xs),
                std_dev: sample_std_dev(xs),
            }
        })
        .collect();

    Ok(ItemAnalysis { items })
}
