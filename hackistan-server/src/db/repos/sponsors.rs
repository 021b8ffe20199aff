//! Sponsor (ally) repository

use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Sponsor record from database
#[derive(Debug, Clone, FromRow)]
pub struct SponsorRow {
    pub id: i32,
    pub name: String,
    pub tier: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub mission_statement: Option<String>,
}

/// Sponsor repository
pub struct SponsorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SponsorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a hackathon's sponsors by id. Tier ordering is the composer's.
    pub async fn list_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<SponsorRow>, DbError> {
        let rows = sqlx::query_as::<_, SponsorRow>(
            r#"
            SELECT
                a.id,
                a.name,
                a.tier,
                a.logo_url,
                a.description,
                a.website_url,
                a.mission_statement
            FROM allies a
            JOIN ally_hackathons ah ON ah.ally_id = a.id
            WHERE ah.hackathon_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(hackathon_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
