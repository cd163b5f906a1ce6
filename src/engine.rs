//! Closed operation dispatch and the combined factor report.
//!
//! Callers that route requests dynamically (e.g. a service layer mapping
//! an endpoint to a computation) dispatch through the [`Operation`] enum
//! rather than looking functions up by name, so an unsupported operation
//! is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    correlation_matrix, cronbach_alpha, descriptive_statistics, item_analysis, validate,
};
use crate::error::AnalysisError;
use crate::matrix::ScoreMatrix;
use crate::result::{
    CorrelationSummary, DescriptiveSummary, FactorReport, ItemAnalysis, ReliabilityRating,
};

/// The analyses the engine can run, as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Cronbach's alpha for the item group.
    CronbachAlpha,
    /// Per-item descriptive statistics.
    DescriptiveStatistics,
    /// Pairwise Pearson correlation matrix with pair summary.
    CorrelationMatrix,
    /// Item-total / item-rest screening.
    ItemAnalysis,
}

/// Output of [`run`], one variant per [`Operation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AnalysisOutput {
    /// Cronbach's alpha, rounded to 3 decimals.
    Alpha(f64),
    /// Per-item descriptive statistics.
    Descriptives(DescriptiveSummary),
    /// Correlation matrix and summary.
    Correlations(CorrelationSummary),
    /// Item screening statistics.
    Items(ItemAnalysis),
}

/// Run a single operation against a score matrix.
///
/// # Errors
///
/// Propagates the operation's validation errors. Descriptive statistics
/// never fail; the other three require at least 2 items and 2 complete
/// observations.
pub fn run(operation: Operation, matrix: &ScoreMatrix) -> Result<AnalysisOutput, AnalysisError> {
    match operation {
        Operation::CronbachAlpha => cronbach_alpha(matrix).map(AnalysisOutput::Alpha),
        Operation::DescriptiveStatistics => {
            Ok(AnalysisOutput::Descriptives(descriptive_statistics(matrix)))
        }
        Operation::CorrelationMatrix => {
            correlation_matrix(matrix).map(AnalysisOutput::Correlations)
        }
        Operation::ItemAnalysis => item_analysis(matrix).map(AnalysisOutput::Items),
    }
}

/// Run the full per-factor analysis: alpha, rating, descriptives,
/// correlations, and item screening in one call.
///
/// Each computation performs its own complete-case drop, so the report is
/// exactly what the individual operations would return.
///
/// # Errors
///
/// Fails as a whole on validation errors; a factor report without alpha
/// is meaningless.
pub fn analyze(matrix: &ScoreMatrix) -> Result<FactorReport, AnalysisError> {
    let cleaned = validate(matrix)?;
    let alpha = cronbach_alpha(matrix)?;

    Ok(FactorReport {
        alpha,
        rating: ReliabilityRating::from_alpha(alpha),
        n_items: cleaned.n_items(),
        n_observations: cleaned.n_observations(),
        descriptives: descriptive_statistics(matrix),
        correlations: correlation_matrix(matrix)?,
        item_analysis: item_analysis(matrix)?,
    })
}
