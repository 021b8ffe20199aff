//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::HackathonStore;
use crate::db::{
    DbError, HackathonRepo, HackathonRow, ReviewRepo, ReviewRow, SponsorRepo, SponsorRow,
    SubmissionRepo, SubmissionRow, TrackRepo, TrackRow,
};
use crate::models::NewReview;

/// Store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HackathonStore for PgStore {
    async fn active_hackathon(&self) -> Result<Option<HackathonRow>, DbError> {
        HackathonRepo::new(&self.pool).active().await
    }

    async fn tracks_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<TrackRow>, DbError> {
        TrackRepo::new(&self.pool)
            .list_for_hackathon(hackathon_id)
            .await
    }

    async fn submission_count(&self, hackathon_id: i32) -> Result<i64, DbError> {
        HackathonRepo::new(&self.pool)
            .submission_count(hackathon_id)
            .await
    }

    async fn participant_count(&self, hackathon_id: i32) -> Result<i64, DbError> {
        HackathonRepo::new(&self.pool)
            .participant_count(hackathon_id)
            .await
    }

    async fn submissions_for_hackathon(
        &self,
        hackathon_id: i32,
        track_id: Option<i32>,
    ) -> Result<Vec<SubmissionRow>, DbError> {
        SubmissionRepo::new(&self.pool)
            .list_for_hackathon(hackathon_id, track_id)
            .await
    }

    async fn submission(&self, submission_id: i32) -> Result<Option<SubmissionRow>, DbError> {
        SubmissionRepo::new(&self.pool).get(submission_id).await
    }

    async fn reviews_for_submission(&self, submission_id: i32) -> Result<Vec<ReviewRow>, DbError> {
        ReviewRepo::new(&self.pool)
            .list_for_submission(submission_id)
            .await
    }

    async fn insert_review(&self, review: &NewReview) -> Result<ReviewRow, DbError> {
        ReviewRepo::new(&self.pool).create(review).await
    }

    async fn sponsors_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<SponsorRow>, DbError> {
        SponsorRepo::new(&self.pool)
            .list_for_hackathon(hackathon_id)
            .await
    }
}
