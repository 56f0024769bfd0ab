//! Dense travel cost matrix.

use crate::error::ConfigError;

/// Immutable N×N table of pairwise travel costs.
///
/// `cost(i, j)` is the cost of traveling from location `i` to location `j`.
/// The matrix is not required to be symmetric; the diagonal is conventionally
/// zero but not enforced. Both engines share it read-only.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix.cost(1, 2), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    size: usize,
    /// Row-major storage: `costs[i * size + j]` is the cost i→j.
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from nested rows, validating shape and values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when there are fewer than two rows, any row
    /// length differs from the row count, or any entry is negative, NaN,
    /// or infinite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let size = rows.len();
        if size < 2 {
            return Err(ConfigError::MatrixTooSmall(size));
        }

        let mut costs = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(ConfigError::NonSquareMatrix {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidCost { row, col, value });
                }
                costs.push(value);
            }
        }

        Ok(Self { size, costs })
    }

    /// Number of locations N.
    pub fn len(&self) -> usize {
        self.size
    }

    /// `true` only for the degenerate empty matrix, which `from_rows`
    /// rejects; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cost of traveling from location `i` to location `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "location index out of range");
        self.costs[i * self.size + j]
    }
}
