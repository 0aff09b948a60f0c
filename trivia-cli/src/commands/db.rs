//! Database maintenance commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_core::TriviaConfig;
use trivia_server::db::{create_pool, migrations, PgPool};

#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommands,
}

#[derive(Subcommand, Debug)]
pub enum DbCommands {
    /// Create the categories and questions tables if missing
    Migrate(ConnectArgs),
    /// Run migrations, then insert the default categories into an empty table
    Seed(ConnectArgs),
}

#[derive(Parser, Debug)]
pub struct ConnectArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_db(args: DbArgs, config: TriviaConfig) -> Result<()> {
    match args.command {
        DbCommands::Migrate(connect_args) => {
            let pool = connect(connect_args, &config).await?;
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("Migrations complete");
        }
        DbCommands::Seed(connect_args) => {
            let pool = connect(connect_args, &config).await?;
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
            let inserted = migrations::seed_default_categories(&pool)
                .await
                .context("Failed to seed categories")?;
            println!("Inserted {} categories", inserted);
        }
    }
    Ok(())
}

async fn connect(args: ConnectArgs, config: &TriviaConfig) -> Result<PgPool> {
    let mut database = config.database.clone();
    if let Some(url) = args.database_url {
        database.url = url;
    }

    create_pool(&database)
        .await
        .context("Failed to create database pool")
}
