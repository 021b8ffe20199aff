//! hackistan-server: hackathon read-model API
//!
//! Serves the active hackathon, its tracks, submissions, reviews, and
//! sponsors as JSON. Every response is composed from PostgreSQL at request
//! time; nothing is cached.

pub mod composer;
pub mod db;
pub mod http;
pub mod models;
pub mod store;

pub use composer::{ComposeError, Composer};
pub use http::{run_server, ApiError, ServerConfig};
pub use store::{HackathonStore, PgStore};
