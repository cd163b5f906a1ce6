//! Score matrix types and complete-case cleaning.
//!
//! A [`ScoreMatrix`] holds the caller's raw survey data: named item
//! columns of equal length, where each observation is `Option<f64>` and
//! `None` marks a missing score. Construction checks shape (rectangular,
//! unique names), so every downstream computation can rely on it.
//!
//! [`CleanedMatrix`] is the complete-case view: every row containing a
//! missing value in any column has been dropped, leaving dense `f64`
//! columns ready for numeric work.

use std::fmt;

/// Errors that can occur while building a [`ScoreMatrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A column with this name was already added.
    DuplicateColumn {
        /// The offending column name.
        name: String,
    },

    /// A column's length does not match the columns already present.
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Number of observations in the offending column.
        got: usize,
        /// Number of observations in the columns already present.
        expected: usize,
    },

    /// A row's width does not match the number of column names.
    RowLengthMismatch {
        /// Index of the offending row (0-based).
        row: usize,
        /// Number of values in the offending row.
        got: usize,
        /// Number of column names supplied.
        expected: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DuplicateColumn { name } => {
                write!(f, "duplicate column name '{}'", name)
            }
            MatrixError::ColumnLengthMismatch {
                column,
                got,
                expected,
            } => {
                write!(
                    f,
                    "column '{}' has {} observations, expected {}",
                    column, got, expected
                )
            }
            MatrixError::RowLengthMismatch { row, got, expected } => {
                write!(f, "row {} has {} values, expected {}", row, got, expected)
            }
        }
    }
}

impl std::error::Error for MatrixError {}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    scores: Vec<Option<f64>>,
}

/// A matrix of survey scores: named item columns over respondent rows.
///
/// Columns keep their insertion order; result types key off the column
/// names verbatim. Missing observations are `None`. A score of `f64::NAN`
/// is accepted and treated as missing when rows are cleaned, matching the
/// sentinel convention of spreadsheet parsers.
#[derive(Debug, Clone, Default)]
pub struct ScoreMatrix {
    columns: Vec<Column>,
}

impl ScoreMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DuplicateColumn`] if the name is already
    /// present, or [`MatrixError::ColumnLengthMismatch`] if the column's
    /// length differs from the columns already added.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        scores: Vec<Option<f64>>,
    ) -> Result<(), MatrixError> {
        let name = name.into();
        if self.columns.iter().any(|c| c.name == name) {
            return Err(MatrixError::DuplicateColumn { name });
        }
        if let Some(first) = self.columns.first() {
            if scores.len() != first.scores.len() {
                return Err(MatrixError::ColumnLengthMismatch {
                    column: name,
                    got: scores.len(),
                    expected: first.scores.len(),
                });
            }
        }
        self.columns.push(Column { name, scores });
        Ok(())
    }

    /// Build a matrix from `(name, scores)` column pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScoreMatrix::push_column`].
    pub fn from_columns<N>(columns: Vec<(N, Vec<Option<f64>>)>) -> Result<Self, MatrixError>
    where
        N: Into<String>,
    {
        let mut matrix = Self::new();
        for (name, scores) in columns {
            matrix.push_column(name, scores)?;
        }
        Ok(matrix)
    }

    /// Build a matrix from rows of observations, the natural shape of
    /// parsed upload data (one row per respondent).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowLengthMismatch`] if any row's width
    /// differs from `names.len()`, or [`MatrixError::DuplicateColumn`]
    /// for repeated names.
    pub fn from_rows(names: &[&str], rows: &[Vec<Option<f64>>]) -> Result<Self, MatrixError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != names.len() {
                return Err(MatrixError::RowLengthMismatch {
                    row: i,
                    got: row.len(),
                    expected: names.len(),
                });
            }
        }
        let mut matrix = Self::new();
        for (j, &name) in names.iter().enumerate() {
            let scores = rows.iter().map(|row| row[j]).collect();
            matrix.push_column(name, scores)?;
        }
        Ok(matrix)
    }

    /// Build a matrix from rows of plain numbers, treating `NaN` as
    /// missing. Convenient for callers whose parser emits NaN for blank
    /// cells.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScoreMatrix::from_rows`].
    pub fn from_numeric_rows(names: &[&str], rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let option_rows: Vec<Vec<Option<f64>>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v.is_nan() { None } else { Some(v) })
                    .collect()
            })
            .collect();
        Self::from_rows(names, &option_rows)
    }

    /// Number of item columns.
    pub fn n_items(&self) -> usize {
        self.columns.len()
    }

    /// Number of observation rows, including incomplete ones.
    pub fn n_observations(&self) -> usize {
        self.columns.first().map_or(0, |c| c.scores.len())
    }

    /// True if the matrix has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Item names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Drop every row with a missing value in any column.
    ///
    /// `None` and `NaN` both count as missing. The result has the same
    /// columns in the same order; only rows shrink.
    pub fn complete_cases(&self) -> CleanedMatrix {
        let keep: Vec<usize> = (0..self.n_observations())
            .filter(|&r| {
                self.columns
                    .iter()
                    .all(|c| matches!(c.scores[r], Some(v) if !v.is_nan()))
            })
            .collect();

        let names = self.columns.iter().map(|c| c.name.clone()).collect();
        let columns = self
            .columns
            .iter()
            .map(|c| keep.iter().filter_map(|&r| c.scores[r]).collect())
            .collect();

        CleanedMatrix {
            names,
            columns,
            n_rows: keep.len(),
        }
    }
}

/// A complete-case matrix: dense columns with no missing values.
///
/// Produced by [`ScoreMatrix::complete_cases`]; not constructed directly.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedMatrix {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    n_rows: usize,
}

impl CleanedMatrix {
    /// Number of item columns.
    pub fn n_items(&self) -> usize {
        self.columns.len()
    }

    /// Number of complete observation rows.
    pub fn n_observations(&self) -> usize {
        self.n_rows
    }

    /// Item names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the item at `index`.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Scores of the item at `index`, one entry per complete row.
    pub fn column(&self, index: usize) -> &[f64] {
        &self.columns[index]
    }

    /// Row-wise sums across all items: each respondent's total score.
    pub fn row_totals(&self) -> Vec<f64> {
        (0..self.n_rows)
            .map(|r| self.columns.iter().map(|c| c[r]).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_column_rejects_duplicate_name() {
        let mut m = ScoreMatrix::new();
        m.push_column("q1", vec![Some(1.0)]).unwrap();
        let err = m.push_column("q1", vec![Some(2.0)]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DuplicateColumn {
                name: "q1".to_string()
            }
        );
    }

    #[test]
    fn push_column_rejects_length_mismatch() {
        let mut m = ScoreMatrix::new();
        m.push_column("q1", vec![Some(1.0), Some(2.0)]).unwrap();
        let err = m.push_column("q2", vec![Some(3.0)]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ColumnLengthMismatch {
                column: "q2".to_string(),
                got: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = ScoreMatrix::from_rows(
            &["q1", "q2"],
            &[vec![Some(1.0), Some(2.0)], vec![Some(3.0)]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MatrixError::RowLengthMismatch {
                row: 1,
                got: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn complete_cases_drops_rows_with_missing_values() {
        let m = ScoreMatrix::from_rows(
            &["q1", "q2"],
            &[
                vec![Some(1.0), Some(2.0)],
                vec![None, Some(3.0)],
                vec![Some(4.0), Some(5.0)],
                vec![Some(6.0), None],
            ],
        )
        .unwrap();

        let cleaned = m.complete_cases();
        assert_eq!(cleaned.n_observations(), 2);
        assert_eq!(cleaned.n_items(), 2);
        assert_eq!(cleaned.column(0), &[1.0, 4.0]);
        assert_eq!(cleaned.column(1), &[2.0, 5.0]);
    }

    #[test]
    fn complete_cases_treats_nan_as_missing() {
        let m = ScoreMatrix::from_numeric_rows(
            &["q1", "q2"],
            &[vec![1.0, 2.0], vec![f64::NAN, 3.0], vec![4.0, 5.0]],
        )
        .unwrap();

        let cleaned = m.complete_cases();
        assert_eq!(cleaned.n_observations(), 2);
        assert_eq!(cleaned.column(0), &[1.0, 4.0]);
    }

    #[test]
    fn complete_cases_preserves_column_order_and_names() {
        let m = ScoreMatrix::from_rows(
            &["third", "first", "second"],
            &[vec![Some(1.0), Some(2.0), Some(3.0)]],
        )
        .unwrap();

        let cleaned = m.complete_cases();
        assert_eq!(cleaned.names(), &["third", "first", "second"]);
    }

    #[test]
    fn row_totals_sum_across_items() {
        let m = ScoreMatrix::from_rows(
            &["q1", "q2"],
            &[vec![Some(1.0), Some(2.0)], vec![Some(3.0), Some(4.0)]],
        )
        .unwrap();

        let totals = m.complete_cases().row_totals();
        assert_eq!(totals, vec![3.0, 7.0]);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m = ScoreMatrix::new();
        assert!(m.is_empty());
        assert_eq!(m.n_observations(), 0);
        assert_eq!(m.complete_cases().n_observations(), 0);
    }
}
