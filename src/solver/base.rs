//! Trait base para solucionadores de inversão.

use crate::types::matrix::Matrix;
use crate::MatcacheResult;

/// Trait para solucionadores numéricos de inversão de matrizes.
///
/// Um solucionador recebe uma matriz quadrada e produz sua inversa
/// matemática, ou falha quando a matriz não é quadrada ou é singular.
pub trait InverseSolver {
    /// Retorna o nome do solucionador.
    fn name(&self) -> &str;

    /// Inverte a matriz.
    ///
    /// # Erros
    ///
    /// - [`MatcacheError::InvalidDimensions`] quando a matriz não é quadrada.
    /// - [`MatcacheError::SingularMatrix`] quando não existe inversa.
    ///
    /// [`MatcacheError::InvalidDimensions`]: crate::MatcacheError::InvalidDimensions
    /// [`MatcacheError::SingularMatrix`]: crate::MatcacheError::SingularMatrix
    fn invert(&self, matrix: &Matrix) -> MatcacheResult<Matrix>;
}
