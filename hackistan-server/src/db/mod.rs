//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed pool, passed down; no global connection
//! - List operations use JOINs and GROUP BY - no N+1 queries
//! - Rely on DB constraints and map violations - no check-then-insert
//! - Single-statement writes; composed reads are not wrapped in a transaction

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use sqlx::PgPool;
pub use repos::*;
