//! Hackathon repository
//!
//! Looks up the active hackathon and its headline counts.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Hackathon record from database
#[derive(Debug, Clone, FromRow)]
pub struct HackathonRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub submission_deadline: Option<DateTime<Utc>>,
    pub prizes_total: Option<f64>,
}

/// Hackathon repository
pub struct HackathonRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> HackathonRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the active hackathon.
    ///
    /// A partial unique index keeps this to one row; if older data holds
    /// several, the most recently created wins.
    pub async fn active(&self) -> Result<Option<HackathonRow>, DbError> {
        let row = sqlx::query_as::<_, HackathonRow>(
            r#"
            SELECT
                id,
                title,
                description,
                status,
                start_date,
                end_date,
                submission_deadline,
                prizes_total::float8 AS prizes_total
            FROM hackathons
            WHERE status = 'active'
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Count submissions entered in a hackathon.
    pub async fn submission_count(&self, hackathon_id: i32) -> Result<i64, DbError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE hackathon_id = $1")
            .bind(hackathon_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Count distinct hackers registered for a hackathon.
    pub async fn participant_count(&self, hackathon_id: i32) -> Result<i64, DbError> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT hacker_id) FROM hackathon_registrations WHERE hackathon_id = $1",
        )
        .bind(hackathon_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
