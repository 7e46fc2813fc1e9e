//! Solucionadores de inversão de matrizes.
//!
//! Este módulo contém a interface do solucionador numérico e a
//! implementação por eliminação de Gauss-Jordan.

mod base;
mod gauss;

pub use base::InverseSolver;
pub use gauss::GaussJordanSolver;
