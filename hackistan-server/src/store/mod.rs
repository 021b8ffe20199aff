//! Storage seam for the composer
//!
//! `HackathonStore` is the only way the composer reaches data. `PgStore`
//! is the production implementation; it is constructed once at startup
//! around an explicit pool and injected into the composer.

use async_trait::async_trait;

use crate::db::{DbError, HackathonRow, ReviewRow, SponsorRow, SubmissionRow, TrackRow};
use crate::models::NewReview;

mod pg;

#[cfg(test)]
pub(crate) mod memory;

pub use pg::PgStore;

/// Row-level access to hackathon data.
///
/// Implementations return raw rows with aggregates already computed per
/// category; shaping and derived fields belong to the composer.
#[async_trait]
pub trait HackathonStore: Send + Sync {
    /// The active hackathon, if any.
    async fn active_hackathon(&self) -> Result<Option<HackathonRow>, DbError>;

    /// Tracks ordered by id with live submission counts.
    async fn tracks_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<TrackRow>, DbError>;

    async fn submission_count(&self, hackathon_id: i32) -> Result<i64, DbError>;

    async fn participant_count(&self, hackathon_id: i32) -> Result<i64, DbError>;

    /// Submissions newest first, optionally restricted to one track.
    async fn submissions_for_hackathon(
        &self,
        hackathon_id: i32,
        track_id: Option<i32>,
    ) -> Result<Vec<SubmissionRow>, DbError>;

    async fn submission(&self, submission_id: i32) -> Result<Option<SubmissionRow>, DbError>;

    /// Reviews newest first; empty for unknown submissions.
    async fn reviews_for_submission(&self, submission_id: i32) -> Result<Vec<ReviewRow>, DbError>;

    /// Insert one review. Unknown submission or reviewer is `NotFound`.
    async fn insert_review(&self, review: &NewReview) -> Result<ReviewRow, DbError>;

    async fn sponsors_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<SponsorRow>, DbError>;
}
