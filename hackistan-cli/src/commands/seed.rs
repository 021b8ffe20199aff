//! Demo data command

use anyhow::{Context, Result};
use clap::Parser;
use hackistan_server::db::{migrations, seed};

use super::DatabaseArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Migrate, then load demo data into an empty database
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if seed::run(&pool).await.context("Failed to seed database")? {
        tracing::info!("Demo data loaded");
    } else {
        tracing::info!("Hackathons already present, seed skipped");
    }
    Ok(())
}
