//! Tipos compartilhados do Matcache.

pub mod config;
pub mod errors;
pub mod matrix;

pub use config::Config;
pub use errors::{MatcacheError, MatcacheResult};
pub use matrix::Matrix;
