//! Result types for reliability analysis operations.
//!
//! Every keyed result preserves the caller's column names verbatim and in
//! insertion order, as an ordered list of per-item records. Undefined
//! statistics are carried as `f64::NAN`; when serialized to JSON they
//! come out as `null`, which upstream layers render as "N/A".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::WEAK_ITEM_THRESHOLD;

/// Descriptive statistics for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptives {
    /// Item (column) name, verbatim from the input matrix.
    pub item: String,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
    /// Sample standard deviation (n−1 denominator).
    pub std_dev: f64,
    /// Sample variance (n−1 denominator).
    pub variance: f64,
    /// Smallest observed score.
    pub min: f64,
    /// Largest observed score.
    pub max: f64,
    /// Number of complete observations the statistics were computed from.
    pub count: usize,
    /// Bias-adjusted sample skewness (G1).
    pub skewness: f64,
    /// Bias-adjusted sample excess kurtosis (G2).
    pub kurtosis: f64,
}

/// Per-item descriptive statistics for a whole factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    /// One record per item, in the input matrix's column order.
    pub items: Vec<ItemDescriptives>,
}

impl DescriptiveSummary {
    /// Look up one item's statistics by name.
    pub fn get(&self, item: &str) -> Option<&ItemDescriptives> {
        self.items.iter().find(|d| d.item == item)
    }
}

/// Pairwise Pearson correlations between items, with a summary over the
/// distinct pairs.
///
/// The matrix is symmetric with a unit diagonal. `matrix[i][j]` is the
/// coefficient between `items[i]` and `items[j]`. The summary statistics
/// cover only the strictly-upper-triangular entries: each unordered pair
/// counted once, diagonal excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSummary {
    /// Item names, in the input matrix's column order.
    pub items: Vec<String>,
    /// Full symmetric coefficient matrix aligned with `items`.
    pub matrix: Vec<Vec<f64>>,
    /// Mean of the distinct pairwise coefficients.
    pub mean: f64,
    /// Largest distinct pairwise coefficient.
    pub max: f64,
    /// Smallest distinct pairwise coefficient.
    pub min: f64,
}

impl CorrelationSummary {
    /// Look up the coefficient for a pair of items by name.
    ///
    /// Order does not matter; `get("a", "b") == get("b", "a")`.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.items.iter().position(|n| n == a)?;
        let j = self.items.iter().position(|n| n == b)?;
        Some(self.matrix[i][j])
    }
}

/// Item screening statistics for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    /// Item (column) name, verbatim from the input matrix.
    pub item: String,
    /// Correlation of the item with the total score (all items summed,
    /// including this one).
    pub item_total: f64,
    /// Correlation of the item with the rest score (all *other* items
    /// summed). Free of the self-inflation in `item_total`.
    pub item_rest: f64,
    /// Item mean.
    pub mean: f64,
    /// Item sample standard deviation.
    pub std_dev: f64,
}

impl ItemStats {
    /// True if the item-rest correlation falls below the conventional
    /// screening threshold, suggesting the item measures something else.
    ///
    /// An undefined (NaN) item-rest correlation is not flagged; callers
    /// should treat it as "not assessable" rather than weak.
    pub fn is_weak(&self) -> bool {
        self.item_rest < WEAK_ITEM_THRESHOLD
    }
}

/// Item-total / item-rest analysis for a whole factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAnalysis {
    /// One record per item, in the input matrix's column order.
    pub items: Vec<ItemStats>,
}

impl ItemAnalysis {
    /// Look up one item's screening statistics by name.
    pub fn get(&self, item: &str) -> Option<&ItemStats> {
        self.items.iter().find(|s| s.item == item)
    }
}

/// Conventional interpretation band for a Cronbach's alpha value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliabilityRating {
    /// alpha ≥ 0.9
    Excellent,
    /// 0.8 ≤ alpha < 0.9
    Good,
    /// 0.7 ≤ alpha < 0.8
    Acceptable,
    /// 0.6 ≤ alpha < 0.7
    Questionable,
    /// 0.5 ≤ alpha < 0.6
    Poor,
    /// alpha < 0.5
    Unacceptable,
}

impl ReliabilityRating {
    /// Classify an alpha coefficient into its interpretation band.
    pub fn from_alpha(alpha: f64) -> Self {
        if alpha >= 0.9 {
            ReliabilityRating::Excellent
        } else if alpha >= 0.8 {
            ReliabilityRating::Good
        } else if alpha >= 0.7 {
            ReliabilityRating::Acceptable
        } else if alpha >= 0.6 {
            ReliabilityRating::Questionable
        } else if alpha >= 0.5 {
            ReliabilityRating::Poor
        } else {
            ReliabilityRating::Unacceptable
        }
    }

    /// Human-readable label for the band.
    pub fn label(self) -> &'static str {
        match self {
            ReliabilityRating::Excellent => "Excellent",
            ReliabilityRating::Good => "Good",
            ReliabilityRating::Acceptable => "Acceptable",
            ReliabilityRating::Questionable => "Questionable",
            ReliabilityRating::Poor => "Poor",
            ReliabilityRating::Unacceptable => "Unacceptable",
        }
    }
}

impl fmt::Display for ReliabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete reliability analysis of one factor: alpha plus all supporting
/// statistics, produced by [`crate::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorReport {
    /// Cronbach's alpha, rounded to 3 decimals.
    pub alpha: f64,
    /// Interpretation band for `alpha`.
    pub rating: ReliabilityRating,
    /// Number of items in the factor.
    pub n_items: usize,
    /// Number of complete observations used for alpha.
    pub n_observations: usize,
    /// Per-item descriptive statistics.
    pub descriptives: DescriptiveSummary,
    /// Inter-item correlation matrix and summary.
    pub correlations: CorrelationSummary,
    /// Item-total / item-rest screening statistics.
    pub item_analysis: ItemAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_band_boundaries() {
        assert_eq!(
            ReliabilityRating::from_alpha(0.95),
            ReliabilityRating::Excellent
        );
        assert_eq!(ReliabilityRating::from_alpha(0.9), ReliabilityRating::Excellent);
        assert_eq!(ReliabilityRating::from_alpha(0.89), ReliabilityRating::Good);
        assert_eq!(ReliabilityRating::from_alpha(0.8), ReliabilityRating::Good);
        assert_eq!(
            ReliabilityRating::from_alpha(0.7),
            ReliabilityRating::Acceptable
        );
        assert_eq!(
            ReliabilityRating::from_alpha(0.6),
            ReliabilityRating::Questionable
        );
        assert_eq!(ReliabilityRating::from_alpha(0.5), ReliabilityRating::Poor);
        assert_eq!(
            ReliabilityRating::from_alpha(0.0),
            ReliabilityRating::Unacceptable
        );
        assert_eq!(
            ReliabilityRating::from_alpha(-0.4),
            ReliabilityRating::Unacceptable
        );
    }

    #[test]
    fn weak_item_threshold() {
        let weak = ItemStats {
            item: "q1".to_string(),
            item_total: 0.4,
            item_rest: 0.1,
            mean: 3.0,
            std_dev: 1.0,
        };
        assert!(weak.is_weak());

        let strong = ItemStats {
            item_rest: 0.6,
            ..weak.clone()
        };
        assert!(!strong.is_weak());

        let undefined = ItemStats {
            item_rest: f64::NAN,
            ..weak
        };
        assert!(!undefined.is_weak(), "NaN is not assessable, not weak");
    }

    #[test]
    fn correlation_lookup_is_symmetric() {
        let summary = CorrelationSummary {
            items: vec!["a".to_string(), "b".to_string()],
            matrix: vec![vec![1.0, 0.5], vec![0.5, 1.0]],
            mean: 0.5,
            max: 0.5,
            min: 0.5,
        };
        assert_eq!(summary.get("a", "b"), Some(0.5));
        assert_eq!(summary.get("b", "a"), Some(0.5));
        assert_eq!(summary.get("a", "a"), Some(1.0));
        assert_eq!(summary.get("a", "missing"), None);
    }
}
