//! Command implementations for the hackistan CLI

use anyhow::{Context, Result};
use clap::Args;
use hackistan_server::db::{create_pool_with_options, PgPool, DEFAULT_MAX_CONNECTIONS};

use crate::config;

pub mod migrate;
pub mod seed;
pub mod serve;

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env files)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub async fn connect(self) -> Result<PgPool> {
        let url = config::database_url(self.database_url)?;
        tracing::debug!(max_connections = self.max_connections, "connecting to database");
        create_pool_with_options(&url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
