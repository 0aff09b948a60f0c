//! trivia CLI - run and maintain the trivia API
//!
//! - `serve`: HTTP API over PostgreSQL (or `--memory`)
//! - `db migrate` / `db seed`: schema and default categories

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_core::TriviaConfig;

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia questions API server",
    long_about = "Serve trivia questions, categories and quizzes over HTTP, backed by PostgreSQL."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long, global = true, env = "TRIVIA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Database maintenance (migrate, seed)
    Db(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so clap `env` attributes see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug })?;

    let config = TriviaConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, config).await,
        Commands::Db(args) => commands::db::run_db(args, config).await,
    }
}
