//! Interface de linha de comando do Matcache.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Matcache - inversão de matrizes com memoização.
#[derive(Parser, Debug)]
#[command(name = "matcache")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "matcache.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Inverte uma matriz dada como JSON (ex.: "[[1,2],[3,4]]").
    Invert {
        /// Linhas da matriz em JSON.
        matrix: String,
    },

    /// Demonstra o cache: resolve duas vezes, substitui a matriz e resolve de novo.
    Demo,

    /// Mostra versão.
    Version,
}
