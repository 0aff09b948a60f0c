//! HTTP server command
//!
//! Runs the trivia API against PostgreSQL, or against an in-memory store
//! with `--memory`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::TriviaConfig;
use trivia_server::db::{create_pool, migrations};
use trivia_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config/TRIVIA_BIND; default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Serve from an in-memory store seeded with the default categories
    #[arg(long)]
    pub memory: bool,

    /// Do not run migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: TriviaConfig) -> Result<()> {
    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config.bind_addr().context("Invalid bind address in config")?,
    };

    let state = if args.memory {
        tracing::warn!("Using in-memory store, data is lost on shutdown");
        AppState::new(MemoryStore::with_default_categories())
    } else {
        let mut database = config.database;
        if let Some(url) = args.database_url {
            database.url = url;
        }
        let pool = create_pool(&database)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        AppState::new(PgStore::new(pool))
    };

    tracing::info!(bind = %bind_addr, "Starting trivia server");

    // Run server (blocks until shutdown)
    run_server(state, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
