//! Environment loading
//!
//! `.env` in the current directory wins over `~/.hackistan/.env`;
//! variables already set in the process environment win over both.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

/// Directory under `$HOME` holding user-level configuration
const CONFIG_DIR: &str = ".hackistan";

/// Load `.env` files, returning the ones that were read.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = user_env_file() {
        // dotenvy doesn't overwrite existing vars
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// Report which `.env` files were loaded, once tracing is up.
pub fn log_env_sources(loaded: &[PathBuf]) {
    if loaded.is_empty() {
        info!("Using environment variables only (no .env file found)");
        return;
    }
    for path in loaded {
        debug!(path = %path.display(), "loaded .env");
    }
}

fn user_env_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(".env"))
}

/// Resolve the database URL from the flag/env value clap collected.
pub fn database_url(value: Option<String>) -> Result<String> {
    value
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.hackistan/.env")
}
