//! Holder de matriz com inversa em cache.

use crate::types::matrix::Matrix;

/// Estatísticas do cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Matriz com inversa memoizada.
///
/// Mantém o valor atual da matriz e, quando já calculada, sua inversa.
/// Invariante: sempre que `cached_inverse` está presente, ele é a inversa
/// do valor atual de `data`. A invariante é mantida por [`set`], que
/// descarta a inversa antes de devolver o controle ao chamador.
///
/// [`set`]: CachedMatrix::set
#[derive(Debug, Clone)]
pub struct CachedMatrix {
    data: Matrix,
    cached_inverse: Option<Matrix>,
    hits: u64,
    misses: u64,
}

impl CachedMatrix {
    /// Cria um holder com a matriz inicial e cache vazio.
    pub fn new(data: Matrix) -> Self {
        Self {
            data,
            cached_inverse: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Substitui a matriz e invalida a inversa em cache.
    pub fn set(&mut self, new_data: Matrix) {
        self.data = new_data;
        if self.cached_inverse.take().is_some() {
            tracing::debug!("cached inverse invalidated");
        }
    }

    /// Retorna a matriz atual.
    pub fn get(&self) -> &Matrix {
        &self.data
    }

    /// Armazena a inversa no cache, sem validação.
    ///
    /// Restrito ao módulo: apenas [`resolve_inverse`] deve chamar,
    /// imediatamente após calcular a inversa verdadeira de `data`.
    ///
    /// [`resolve_inverse`]: super::resolve_inverse
    pub(super) fn set_inverse(&mut self, inverse: Matrix) {
        self.cached_inverse = Some(inverse);
    }

    /// Retorna o conteúdo atual do cache, sem efeitos colaterais.
    pub fn get_inverse(&self) -> Option<&Matrix> {
        self.cached_inverse.as_ref()
    }

    /// Retorna estatísticas acumuladas de acesso ao cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub(super) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(super) fn record_miss(&mut self) {
        self.misses += 1;
    }
}

impl Default for CachedMatrix {
    /// Holder com a matriz placeholder 0x0 e cache vazio.
    fn default() -> Self {
        Self::new(Matrix::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_new_holder_has_empty_cache() {
        let holder = CachedMatrix::new(sample_matrix());
        assert_eq!(holder.get(), &sample_matrix());
        assert!(holder.get_inverse().is_none());
    }

    #[test]
    fn test_default_holder_uses_placeholder() {
        let holder = CachedMatrix::default();
        assert_eq!(holder.get(), &Matrix::empty());
        assert!(holder.get().to_rows().is_empty());
        assert!(holder.get_inverse().is_none());
    }

    #[test]
    fn test_set_replaces_data_and_clears_cache() {
        let mut holder = CachedMatrix::new(sample_matrix());
        holder.set_inverse(Matrix::identity(2));
        assert!(holder.get_inverse().is_some());

        let new_data = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        holder.set(new_data.clone());

        assert_eq!(holder.get(), &new_data);
        assert!(holder.get_inverse().is_none());
    }

    #[test]
    fn test_set_with_equal_value_still_clears_cache() {
        let mut holder = CachedMatrix::new(sample_matrix());
        holder.set_inverse(Matrix::identity(2));

        holder.set(sample_matrix());
        assert!(holder.get_inverse().is_none());
    }

    #[test]
    fn test_get_inverse_returns_slot_verbatim() {
        let mut holder = CachedMatrix::new(sample_matrix());
        let inverse = Matrix::from_rows(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]).unwrap();

        holder.set_inverse(inverse.clone());
        assert_eq!(holder.get_inverse(), Some(&inverse));
    }

    #[test]
    fn test_stats_hit_rate() {
        let mut holder = CachedMatrix::new(sample_matrix());
        holder.record_miss();
        holder.record_hit();
        holder.record_hit();

        let stats = holder.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_hit_rate_without_accesses() {
        let holder = CachedMatrix::new(sample_matrix());
        assert_eq!(holder.stats().hit_rate(), 0.0);
    }
}
