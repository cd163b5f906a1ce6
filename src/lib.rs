//! # concordia
//!
//! Internal-consistency reliability analysis for survey scale data.
//!
//! This crate provides the statistical engine behind factor reliability
//! checks: given a matrix of respondent scores (rows = observations,
//! columns = items/statements), it computes:
//! - Cronbach's alpha with the classical variance-ratio formula
//! - Per-item descriptive statistics (mean, median, dispersion, shape)
//! - The pairwise Pearson correlation matrix with an off-diagonal summary
//! - Item-total and item-rest correlations for item screening
//!
//! Everything is a pure, synchronous function of the input matrix: no I/O,
//! no shared state, no caching. Callers may freely run one analysis per
//! thread. Upstream concerns (file parsing, HTTP, task bookkeeping) live
//! outside this crate; it consumes a [`ScoreMatrix`] and returns results
//! or a structured [`AnalysisError`].
//!
//! ## Missing data
//!
//! Observations are `Option<f64>`; `None` marks a missing score. Every
//! operation drops incomplete rows independently (complete-case policy)
//! before computing, so partially answered surveys never skew a result.
//!
//! ## Quick Start
//!
//! ```
//! use concordia::{analyze, ScoreMatrix};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = ScoreMatrix::from_numeric_rows(
//!     &["q1", "q2", "q3"],
//!     &[
//!         vec![4.0, 3.0, 4.0],
//!         vec![3.0, 3.0, 2.0],
//!         vec![5.0, 4.0, 5.0],
//!         vec![2.0, 2.0, 3.0],
//!     ],
//! )?;
//!
//! let report = analyze(&matrix)?;
//! assert!(report.alpha <= 1.0);
//! println!("alpha = {:.3} ({})", report.alpha, report.rating);
//! # Ok(())
//! # }
//! ```
//!
//! Single operations are available directly when the full report is not
//! needed, e.g. [`cronbach_alpha`] or [`correlation_matrix`], and through
//! the closed [`Operation`] enum for callers that dispatch dynamically.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod constants;
mod engine;
mod error;
mod matrix;
mod result;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{
    correlation_matrix, cronbach_alpha, descriptive_statistics, item_analysis, validate,
};
pub use constants::{ALPHA_DECIMALS, MIN_ITEMS, MIN_OBSERVATIONS, WEAK_ITEM_THRESHOLD};
pub use engine::{analyze, run, AnalysisOutput, Operation};
pub use error::AnalysisError;
pub use matrix::{CleanedMatrix, MatrixError, ScoreMatrix};
pub use result::{
    CorrelationSummary, DescriptiveSummary, FactorReport, ItemAnalysis, ItemDescriptives,
    ItemStats, ReliabilityRating,
};
