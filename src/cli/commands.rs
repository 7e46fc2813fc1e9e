//! Implementação dos comandos CLI do Matcache.

use std::path::PathBuf;

use crate::cache::{resolve_inverse, CachedMatrix};
use crate::solver::{GaussJordanSolver, InverseSolver};
use crate::types::config::Config;
use crate::types::matrix::Matrix;
use crate::MatcacheResult;

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> MatcacheResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("matcache.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Matcache initialized successfully!");
    println!("Configuration created at: {}", config_path.display());

    Ok(())
}

/// Parses a JSON matrix argument into a [`Matrix`].
fn parse_matrix(json: &str) -> MatcacheResult<Matrix> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
    Matrix::from_rows(rows)
}

/// Inverts a matrix given as JSON rows and prints the inverse.
pub fn invert(matrix_json: &str, config: &Config) -> MatcacheResult<()> {
    let matrix = parse_matrix(matrix_json)?;
    let solver = GaussJordanSolver::from_config(&config.solver);

    let mut holder = CachedMatrix::new(matrix);
    let inverse = resolve_inverse(&mut holder, &solver)?;

    println!("{}", serde_json::to_string(&inverse.to_rows())?);
    Ok(())
}

/// Demonstrates the cache life cycle.
///
/// Resolves the same matrix twice (the second call is a cache hit),
/// replaces the matrix (invalidating the cache) and resolves again.
pub fn demo(config: &Config) -> MatcacheResult<()> {
    let solver = GaussJordanSolver::from_config(&config.solver);
    let mut holder =
        CachedMatrix::new(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?);

    println!("Matrix: {}", serde_json::to_string(&holder.get().to_rows())?);

    let first = resolve_inverse(&mut holder, &solver)?;
    println!(
        "First resolve (computed by {}): {}",
        solver.name(),
        serde_json::to_string(&first.to_rows())?
    );

    let second = resolve_inverse(&mut holder, &solver)?;
    println!(
        "Second resolve (from cache):    {}",
        serde_json::to_string(&second.to_rows())?
    );

    holder.set(Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]])?);
    println!(
        "Matrix replaced with: {}",
        serde_json::to_string(&holder.get().to_rows())?
    );

    let third = resolve_inverse(&mut holder, &solver)?;
    println!(
        "Third resolve (recomputed):     {}",
        serde_json::to_string(&third.to_rows())?
    );

    let stats = holder.stats();
    println!(
        "Cache stats: {} hit(s), {} miss(es), hit rate {:.0}%",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );

    Ok(())
}

/// Shows version information.
pub fn version() {
    println!("matcache {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Inversão de matrizes com memoização");
    println!("https://github.com/SamoraDC/matcache");
}
