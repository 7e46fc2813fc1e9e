//! Cache de inversa de matriz.
//!
//! Este módulo implementa o holder [`CachedMatrix`] e a operação
//! [`resolve_inverse`], que calcula a inversa apenas na primeira chamada
//! por valor de matriz e reaproveita o resultado armazenado até que a
//! matriz seja substituída.

mod holder;

pub use holder::{CacheStats, CachedMatrix};

use crate::solver::InverseSolver;
use crate::types::matrix::Matrix;
use crate::MatcacheResult;

/// Resolve a inversa da matriz do holder.
///
/// Na primeira chamada para um valor de matriz, invoca o solucionador e
/// armazena o resultado; chamadas seguintes retornam o valor em cache sem
/// recálculo, emitindo um evento de log de cache hit. Falhas do
/// solucionador são propagadas sem alterar o cache, então uma nova
/// chamada tenta o solucionador outra vez.
pub fn resolve_inverse<S: InverseSolver>(
    holder: &mut CachedMatrix,
    solver: &S,
) -> MatcacheResult<Matrix> {
    if let Some(inverse) = holder.get_inverse() {
        let inverse = inverse.clone();
        holder.record_hit();
        tracing::info!(solver = solver.name(), "using cached result");
        return Ok(inverse);
    }

    holder.record_miss();
    let inverse = solver.invert(holder.get())?;
    holder.set_inverse(inverse.clone());
    tracing::debug!(
        solver = solver.name(),
        rows = inverse.rows(),
        cols = inverse.cols(),
        "inverse computed and cached"
    );

    Ok(inverse)
}
