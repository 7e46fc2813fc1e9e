//! # Matcache
//!
//! Inversão de matrizes com memoização.
//!
//! Matcache mantém uma matriz junto com sua inversa em cache: a inversa é
//! calculada uma única vez por valor de matriz e reaproveitada nas chamadas
//! seguintes, até que a matriz seja substituída.
//!
//! ## Módulos
//!
//! - [`cache`] - Holder com inversa memoizada e a operação de resolução
//! - [`solver`] - Solucionador numérico de inversão (eliminação de Gauss-Jordan)
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod solver;
pub mod types;

pub use cache::{resolve_inverse, CacheStats, CachedMatrix};
pub use solver::{GaussJordanSolver, InverseSolver};
pub use types::config::Config;
pub use types::errors::{MatcacheError, MatcacheResult};
pub use types::matrix::Matrix;
