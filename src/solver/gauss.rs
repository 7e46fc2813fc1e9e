//! Solucionador por eliminação de Gauss-Jordan.

use super::base::InverseSolver;
use crate::types::config::SolverConfig;
use crate::types::matrix::Matrix;
use crate::{MatcacheError, MatcacheResult};

/// Solucionador de inversão por eliminação de Gauss-Jordan.
///
/// Opera sobre o sistema aumentado `[A | I]` com pivoteamento parcial:
/// em cada coluna o pivô escolhido é o de maior valor absoluto entre as
/// linhas restantes.
pub struct GaussJordanSolver {
    pivot_epsilon: f64,
}

impl GaussJordanSolver {
    /// Cria um novo solucionador com a tolerância padrão.
    pub fn new() -> Self {
        Self {
            pivot_epsilon: SolverConfig::default().pivot_epsilon,
        }
    }

    /// Define a tolerância de pivô.
    #[must_use]
    pub fn with_pivot_epsilon(mut self, pivot_epsilon: f64) -> Self {
        self.pivot_epsilon = pivot_epsilon;
        self
    }

    /// Cria um solucionador a partir da configuração.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            pivot_epsilon: config.pivot_epsilon,
        }
    }
}

impl Default for GaussJordanSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl InverseSolver for GaussJordanSolver {
    fn name(&self) -> &str {
        "Gauss-Jordan"
    }

    fn invert(&self, matrix: &Matrix) -> MatcacheResult<Matrix> {
        let n = matrix.rows();

        // A matriz 0x0 de placeholder também é rejeitada aqui.
        if !matrix.is_square() || n == 0 {
            return Err(MatcacheError::InvalidDimensions {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        // Monta o sistema aumentado [A | I].
        let mut augmented: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| matrix.at(i, j))
                    .chain((0..n).map(|j| if i == j { 1.0 } else { 0.0 }))
                    .collect()
            })
            .collect();

        for col in 0..n {
            // Pivoteamento parcial: maior valor absoluto na coluna.
            let pivot_row = (col..n)
                .max_by(|&a, &b| {
                    augmented[a][col]
                        .abs()
                        .total_cmp(&augmented[b][col].abs())
                })
                .unwrap_or(col);

            if augmented[pivot_row][col].abs() <= self.pivot_epsilon {
                return Err(MatcacheError::SingularMatrix);
            }

            augmented.swap(col, pivot_row);

            let pivot = augmented[col][col];
            for j in 0..2 * n {
                augmented[col][j] /= pivot;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = augmented[row][col];
                for j in 0..2 * n {
                    augmented[row][j] -= factor * augmented[col][j];
                }
            }
        }

        // A metade direita agora contém a inversa.
        Matrix::from_rows(
            augmented
                .into_iter()
                .map(|row| row[n..2 * n].to_vec())
                .collect(),
        )
    }
}
