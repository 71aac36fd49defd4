//! Pearson correlation matrix over every numeric column of the view.

use crate::filter::FilteredView;
use crate::stats::pearson;
use serde::Serialize;

/// Square, symmetric matrix of Pearson coefficients.
///
/// `values[i][j]` is the correlation between `columns[i]` and
/// `columns[j]`; `None` where it is undefined (constant column, fewer
/// than two complete pairs).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        let numeric = view.table().numeric_columns();
        let columns: Vec<String> = numeric.iter().map(|c| c.name.clone()).collect();
        let data: Vec<Vec<Option<f64>>> = numeric.iter().map(|c| view.column_values(c)).collect();

        let n = data.len();
        let mut values = vec![vec![None; n]; n];
        for i in 0..n {
            // Diagonal is 1.0 exactly, unless the column is constant
            values[i][i] = pearson(&data[i], &data[i]).map(|_| 1.0);
            for j in (i + 1)..n {
                let r = pearson(&data[i], &data[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self { columns, values }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Coefficient between two named columns.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.column_index(row)?;
        let j = self.column_index(col)?;
        self.values[i][j]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.len()).all(|i| (0..self.len()).all(|j| self.values[i][j] == self.values[j][i]))
    }
}
