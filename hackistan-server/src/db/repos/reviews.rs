//! Review repository
//!
//! Reviews are immutable: there is an insert and a list, nothing else.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use crate::db::DbError;
use crate::models::{NewReview, Ratings};

/// Review with the reviewer's display name
#[derive(Debug, Clone)]
pub struct ReviewRow {
    pub id: i32,
    pub submission_id: i32,
    pub hacker_id: Option<i32>,
    pub hacker_name: Option<String>,
    pub ratings: Ratings,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for ReviewRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            submission_id: row.try_get("project_id")?,
            hacker_id: row.try_get("hacker_id")?,
            hacker_name: row.try_get("hacker_name")?,
            ratings: Ratings {
                innovation: row.try_get("innovation")?,
                implementation: row.try_get("implementation")?,
                impact: row.try_get("impact")?,
                presentation: row.try_get("presentation")?,
            },
            comment: row.try_get("comment")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reviews for a submission, newest first.
    ///
    /// An unknown submission yields an empty list.
    pub async fn list_for_submission(&self, submission_id: i32) -> Result<Vec<ReviewRow>, DbError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT
                r.id,
                r.project_id,
                r.hacker_id,
                h.name AS hacker_name,
                r.innovation_rating::float8 AS innovation,
                r.implementation_rating::float8 AS implementation,
                r.impact_rating::float8 AS impact,
                r.presentation_rating::float8 AS presentation,
                r.comment,
                r.submission_date AS created_at
            FROM reviews r
            LEFT JOIN hackers h ON h.id = r.hacker_id
            WHERE r.project_id = $1
            ORDER BY r.submission_date DESC, r.id DESC
            "#,
        )
        .bind(submission_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a review and read it back with the reviewer's name.
    ///
    /// Single statement: the CTE inserts, the outer SELECT joins the
    /// reviewer. Foreign-key violations surface as `NotFound`.
    pub async fn create(&self, review: &NewReview) -> Result<ReviewRow, DbError> {
        sqlx::query_as::<_, ReviewRow>(
            r#"
            WITH inserted AS (
                INSERT INTO reviews (
                    project_id, hacker_id, comment,
                    innovation_rating, implementation_rating, impact_rating, presentation_rating
                )
                VALUES ($1, $2, $3, $4::numeric, $5::numeric, $6::numeric, $7::numeric)
                RETURNING
                    id, project_id, hacker_id, comment,
                    innovation_rating, implementation_rating, impact_rating, presentation_rating,
                    submission_date
            )
            SELECT
                i.id,
                i.project_id,
                i.hacker_id,
                h.name AS hacker_name,
                i.innovation_rating::float8 AS innovation,
                i.implementation_rating::float8 AS implementation,
                i.impact_rating::float8 AS impact,
                i.presentation_rating::float8 AS presentation,
                i.comment,
                i.submission_date AS created_at
            FROM inserted i
            LEFT JOIN hackers h ON h.id = i.hacker_id
            "#,
        )
        .bind(review.submission_id)
        .bind(review.hacker_id)
        .bind(&review.comment)
        .bind(review.ratings.innovation)
        .bind(review.ratings.implementation)
        .bind(review.ratings.impact)
        .bind(review.ratings.presentation)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_error(e, review))
    }
}

fn map_insert_error(err: sqlx::Error, review: &NewReview) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.constraint() {
            Some("reviews_project_id_fkey") => {
                return DbError::not_found("submission", review.submission_id);
            }
            Some("reviews_hacker_id_fkey") => {
                return DbError::not_found("hacker", review.hacker_id);
            }
            _ => {}
        }
    }
    DbError::Sqlx(err)
}
