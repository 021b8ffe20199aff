//! Track repository

use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Track with live submission count
#[derive(Debug, Clone, FromRow)]
pub struct TrackRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub prizes: Option<String>,
    pub requirements: Vec<String>,
    pub submission_count: i64,
}

/// Track repository
pub struct TrackRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TrackRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a hackathon's tracks by id with submission counts.
    ///
    /// LEFT JOIN so tracks without submissions report 0.
    pub async fn list_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<TrackRow>, DbError> {
        let rows = sqlx::query_as::<_, TrackRow>(
            r#"
            SELECT
                t.id,
                t.track_name AS title,
                t.description,
                t.prizes,
                t.requirements,
                COUNT(p.id) AS submission_count
            FROM hackathon_tracks t
            LEFT JOIN projects p ON p.track_id = t.id
            WHERE t.hackathon_id = $1
            GROUP BY t.id
            ORDER BY t.id
            "#,
        )
        .bind(hackathon_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
