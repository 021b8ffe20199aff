//! HTTP server command

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use hackistan_server::db::{migrations, seed, PgPool};
use hackistan_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "HACKISTAN_BIND", default_value = "127.0.0.1:4000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Load demo data into an empty database before serving
    #[arg(long)]
    pub seed: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting hackistan server on {}", args.bind);

    let pool = args.db.connect().await?;
    prepare_database(&pool, args.seed).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout_secs),
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

/// Create the schema (idempotent) and optionally load demo data.
async fn prepare_database(pool: &PgPool, with_seed: bool) -> Result<()> {
    migrations::run(pool)
        .await
        .context("Failed to run migrations")?;

    if with_seed {
        let seeded = seed::run(pool).await.context("Failed to seed database")?;
        tracing::info!(seeded, "demo data checked");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackistan_server::db::{create_pool, HackathonRepo};

    #[test]
    fn seed_flag_defaults_off() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert!(!args.seed);
        assert_eq!(args.request_timeout_secs, 30);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn prepare_creates_schema_without_seed() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool");

        prepare_database(&pool, false).await.expect("prepare");
        prepare_database(&pool, false).await.expect("prepare is idempotent");

        HackathonRepo::new(&pool)
            .active()
            .await
            .expect("hackathons table exists");
    }
}
