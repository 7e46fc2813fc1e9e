//! Matrix value type.

use std::ops;

use serde::{Deserialize, Serialize};

use crate::types::errors::{MatcacheError, MatcacheResult};

/// Dense matrix of `f64`, stored row-major.
///
/// Identity is by value: two matrices compare equal when they have the
/// same dimensions and the same cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

/// Forma bruta usada na desserialização, antes da validação.
#[derive(Deserialize)]
struct MatrixData {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl TryFrom<MatrixData> for Matrix {
    type Error = MatcacheError;

    fn try_from(data: MatrixData) -> MatcacheResult<Self> {
        if data.cells.len() != data.rows * data.cols {
            return Err(MatcacheError::InvalidDimensions {
                rows: data.rows,
                cols: data.cols,
            });
        }

        Ok(Self {
            rows: data.rows,
            cols: data.cols,
            cells: data.cells,
        })
    }
}

impl Matrix {
    /// Creates the 0x0 placeholder matrix.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// Builds a matrix from a list of rows.
    ///
    /// All rows must have the same length; ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatcacheResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);

        if rows.iter().any(|r| r.len() != ncols) {
            return Err(MatcacheError::InvalidDimensions {
                rows: nrows,
                cols: ncols,
            });
        }

        Ok(Self {
            rows: nrows,
            cols: ncols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        // chunks exige tamanho não nulo; cobre o placeholder 0x0 e
        // matrizes com zero colunas
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { 1.0 } else { 0.0 }))
                .collect(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = MatcacheResult<Matrix>;

    fn mul(self, rhs: &Matrix) -> MatcacheResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatcacheError::InvalidDimensions {
                rows: rhs.rows,
                cols: rhs.cols,
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_back() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert!(m.is_square());
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(MatcacheError::InvalidDimensions { rows: 2, cols: 2 })
        ));
    }

    #[test]
    fn test_empty_placeholder() {
        let m = Matrix::empty();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
        assert!(m.is_square());
        assert!(m.to_rows().is_empty());
    }

    #[test]
    fn test_to_rows_with_zero_columns() {
        let m = Matrix::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 0);
        assert_eq!(m.to_rows(), vec![Vec::<f64>::new(), Vec::new()]);
    }

    #[test]
    fn test_value_equality() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let c = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 5.0]]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_identity() {
        let i = Matrix::identity(3);
        assert_eq!(
            i.to_rows(),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            m.transpose().to_rows(),
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let i = Matrix::identity(2);

        assert_eq!((&a * &i).unwrap(), a);

        let b = Matrix::from_rows(vec![vec![2.0, 0.0], vec![1.0, 2.0]]).unwrap();
        assert_eq!(
            (&a * &b).unwrap().to_rows(),
            vec![vec![4.0, 4.0], vec![10.0, 8.0]]
        );
    }

    #[test]
    fn test_multiply_incompatible() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        assert!((&a * &b).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_cells() {
        // cells.len() deve ser rows * cols
        let result = serde_json::from_str::<Matrix>(r#"{"rows":2,"cols":2,"cells":[]}"#);
        assert!(result.is_err());

        let result =
            serde_json::from_str::<Matrix>(r#"{"rows":1,"cols":2,"cells":[1.0,2.0,3.0]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_valid_shape() {
        let m: Matrix =
            serde_json::from_str(r#"{"rows":2,"cols":2,"cells":[1.0,2.0,3.0,4.0]}"#).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap());
        assert_eq!(m.at(1, 1), 4.0);
    }
}
