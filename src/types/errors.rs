//! Tipos de erro do Matcache.

use thiserror::Error;

/// Tipo de resultado padrão do Matcache.
pub type MatcacheResult<T> = Result<T, MatcacheError>;

/// Erros possíveis no Matcache.
#[derive(Error, Debug)]
pub enum MatcacheError {
    #[error("Dimensões de matriz inválidas: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Matriz singular, não possui inversa")]
    SingularMatrix,

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatcacheError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
