//! Submission repository
//!
//! Submissions are read together with their track name and per-category
//! review averages in one grouped query.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use crate::db::DbError;
use crate::models::CategoryMeans;

/// Submission with joined track name and review aggregates
#[derive(Debug, Clone)]
pub struct SubmissionRow {
    pub id: i32,
    pub title: String,
    pub team_name: Option<String>,
    pub team_members: Vec<String>,
    pub track_id: Option<i32>,
    pub track_name: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub submission_date: DateTime<Utc>,
    pub submission_url: Option<String>,
    pub demo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub screenshot_urls: Vec<String>,
    pub technologies: Vec<String>,
    pub review_count: i64,
    pub means: CategoryMeans,
}

impl<'r> FromRow<'r, PgRow> for SubmissionRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            team_name: row.try_get("team_name")?,
            team_members: row.try_get("team_members")?,
            track_id: row.try_get("track_id")?,
            track_name: row.try_get("track_name")?,
            description: row.try_get("description")?,
            long_description: row.try_get("long_description")?,
            submission_date: row.try_get("submission_date")?,
            submission_url: row.try_get("submission_url")?,
            demo_url: row.try_get("demo_url")?,
            thumbnail_url: row.try_get("thumbnail_url")?,
            screenshot_urls: row.try_get("screenshot_urls")?,
            technologies: row.try_get("tech_tags")?,
            review_count: row.try_get("review_count")?,
            means: CategoryMeans {
                innovation: row.try_get("avg_innovation")?,
                implementation: row.try_get("avg_implementation")?,
                impact: row.try_get("avg_impact")?,
                presentation: row.try_get("avg_presentation")?,
            },
        })
    }
}

/// Shared SELECT; callers append WHERE, GROUP BY, ORDER BY.
const SUBMISSION_SELECT: &str = r#"
    SELECT
        p.id,
        p.project_name AS title,
        p.team_name,
        p.team_members,
        p.track_id,
        t.track_name,
        p.description,
        p.long_description,
        p.submission_date,
        p.submission_url,
        p.demo_url,
        p.thumbnail_url,
        p.screenshot_urls,
        p.tech_tags,
        COUNT(r.id) AS review_count,
        AVG(r.innovation_rating)::float8 AS avg_innovation,
        AVG(r.implementation_rating)::float8 AS avg_implementation,
        AVG(r.impact_rating)::float8 AS avg_impact,
        AVG(r.presentation_rating)::float8 AS avg_presentation
    FROM projects p
    LEFT JOIN hackathon_tracks t ON t.id = p.track_id
    LEFT JOIN reviews r ON r.project_id = p.id
"#;

/// Submission repository
pub struct SubmissionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SubmissionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a hackathon's submissions, newest first, optionally by track.
    pub async fn list_for_hackathon(
        &self,
        hackathon_id: i32,
        track_id: Option<i32>,
    ) -> Result<Vec<SubmissionRow>, DbError> {
        let sql = format!(
            r#"{SUBMISSION_SELECT}
            WHERE p.hackathon_id = $1
              AND ($2::int IS NULL OR p.track_id = $2)
            GROUP BY p.id, t.track_name
            ORDER BY p.submission_date DESC, p.id DESC
            "#
        );

        let rows = sqlx::query_as::<_, SubmissionRow>(&sql)
            .bind(hackathon_id)
            .bind(track_id)
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Get a single submission by ID.
    pub async fn get(&self, id: i32) -> Result<Option<SubmissionRow>, DbError> {
        let sql = format!(
            r#"{SUBMISSION_SELECT}
            WHERE p.id = $1
            GROUP BY p.id, t.track_name
            "#
        );

        let row = sqlx::query_as::<_, SubmissionRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, seed, HackathonRepo};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_newest_first() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");
        seed::run(&pool).await.expect("seed");

        let hackathon = HackathonRepo::new(&pool)
            .active()
            .await
            .expect("query")
            .expect("active hackathon");

        let rows = SubmissionRepo::new(&pool)
            .list_for_hackathon(hackathon.id, None)
            .await
            .expect("list");

        for pair in rows.windows(2) {
            assert!(pair[0].submission_date >= pair[1].submission_date);
        }
        for row in &rows {
            assert_eq!(row.review_count == 0, row.means.innovation.is_none());
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_submission_is_none() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");

        let row = SubmissionRepo::new(&pool).get(999_999).await.expect("query");
        assert!(row.is_none());
    }
}
