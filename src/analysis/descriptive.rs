//! Per-item descriptive statistics.

use crate::matrix::ScoreMatrix;
use crate::result::{DescriptiveSummary, ItemDescriptives};
use crate::statistics;

/// Summarize central tendency, dispersion, and shape for every item.
///
/// The matrix is cleaned to complete cases first. Unlike the reliability
/// computations, this has no minimum-size precondition: statistics that
/// are undefined for the data at hand (standard deviation of one value,
/// skewness below three samples, anything over zero rows) come back as
/// NaN in that item's record instead of failing the call.
pub fn descriptive_statistics(matrix: &ScoreMatrix) -> DescriptiveSummary {
    let data = matrix.complete_cases();

    let items = (0..data.n_items())
        .map(|i| {
            let xs = data.column(i);
            ItemDescriptives {
                item: data.name(i).to_string(),
                mean: statistics::mean(xs),
                median: statistics::median(xs),
                std_dev: statistics::sample_std_dev(xs),
                variance: statistics::sample_variance(xs),
                min: statistics::min(xs),
                max: statistics::max(xs),
                count: xs.len(),
                skewness: statistics::skewness(xs),
                kurtosis: statistics::kurtosis(xs),
            }
        })
        .collect();

    DescriptiveSummary { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_each_item() {
        let m = ScoreMatrix::from_numeric_rows(
            &["q1", "q2"],
            &[
                vec![1.0, 10.0],
                vec![2.0, 20.0],
                vec![3.0, 30.0],
                vec![4.0, 40.0],
                vec![5.0, 50.0],
            ],
        )
        .unwrap();

        let summary = descriptive_statistics(&m);
        assert_eq!(summary.items.len(), 2);

        let q1 = summary.get("q1").unwrap();
        assert!((q1.mean - 3.0).abs() < 1e-12);
        assert!((q1.median - 3.0).abs() < 1e-12);
        assert!((q1.variance - 2.5).abs() < 1e-12);
        assert!((q1.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
        assert!((q1.min - 1.0).abs() < 1e-12);
        assert!((q1.max - 5.0).abs() < 1e-12);
        assert_eq!(q1.count, 5);
        assert!(q1.skewness.abs() < 1e-12);
        assert!((q1.kurtosis - (-1.2)).abs() < 1e-9);

        let q2 = summary.get("q2").unwrap();
        assert!((q2.mean - 30.0).abs() < 1e-12);
    }

    #[test]
    fn count_reflects_complete_rows() {
        let m = ScoreMatrix::from_rows(
            &["q1", "q2"],
            &[
                vec![Some(1.0), Some(2.0)],
                vec![Some(3.0), None],
                vec![Some(5.0), Some(6.0)],
            ],
        )
        .unwrap();

        let summary = descriptive_statistics(&m);
        // The incomplete middle row is dropped for every item, including
        // q1 whose own value was present.
        assert_eq!(summary.get("q1").unwrap().count, 2);
        assert_eq!(summary.get("q2").unwrap().count, 2);
    }

    #[test]
    fn single_column_is_permitted() {
        let m =
            ScoreMatrix::from_numeric_rows(&["only"], &[vec![2.0], vec![4.0], vec![6.0]]).unwrap();
        let summary = descriptive_statistics(&m);
        assert!((summary.get("only").unwrap().mean - 4.0).abs() < 1e-12);
    }

    #[test]
    fn undefined_statistics_pass_through_as_nan() {
        let m = ScoreMatrix::from_numeric_rows(&["q1", "q2"], &[vec![3.0, 4.0]]).unwrap();
        let summary = descriptive_statistics(&m);

        let q1 = summary.get("q1").unwrap();
        assert!((q1.mean - 3.0).abs() < 1e-12);
        assert_eq!(q1.count, 1);
        assert!(q1.std_dev.is_nan(), "std of one value is undefined");
        assert!(q1.variance.is_nan());
        assert!(q1.skewness.is_nan());
        assert!(q1.kurtosis.is_nan());
    }

    #[test]
    fn empty_matrix_yields_empty_summary() {
        let summary = descriptive_statistics(&ScoreMatrix::new());
        assert!(summary.items.is_empty());
    }
}
