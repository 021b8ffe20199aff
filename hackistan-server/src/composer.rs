//! Read-model composer
//!
//! Turns store rows into the JSON read models the frontend consumes:
//! hackathon with tracks and live counts, submissions with rating
//! summaries, reviews with reviewer names, and tier-ordered sponsors.

use std::sync::Arc;

use tracing::debug;

use crate::db::{DbError, HackathonRow, ReviewRow, SponsorRow, SubmissionRow, TrackRow};
use crate::models::{
    read::prize_lines, AvgRating, Hackathon, HackathonStatus, NewReview, Review, ReviewSubmission,
    Sponsor, SponsorTier, Submission, Track, ValidationError,
};
use crate::store::HackathonStore;

/// Composer error type
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Assembles read models from a `HackathonStore`
#[derive(Clone)]
pub struct Composer {
    store: Arc<dyn HackathonStore>,
}

impl Composer {
    pub fn new(store: Arc<dyn HackathonStore>) -> Self {
        Self { store }
    }

    /// The active hackathon with its tracks and headline counts.
    pub async fn get_active_hackathon(&self) -> Result<Option<Hackathon>, DbError> {
        let Some(row) = self.store.active_hackathon().await? else {
            debug!("no active hackathon");
            return Ok(None);
        };

        let (tracks, submission_count, participant_count) = tokio::try_join!(
            self.store.tracks_for_hackathon(row.id),
            self.store.submission_count(row.id),
            self.store.participant_count(row.id),
        )?;

        debug!(
            hackathon_id = row.id,
            tracks = tracks.len(),
            submission_count,
            participant_count,
            "composed active hackathon"
        );

        let tracks = tracks.into_iter().map(Track::from).collect();
        Ok(Some(compose_hackathon(
            row,
            tracks,
            submission_count,
            participant_count,
        )?))
    }

    /// Id of the active hackathon, without composing it.
    pub async fn active_hackathon_id(&self) -> Result<Option<i32>, DbError> {
        Ok(self.store.active_hackathon().await?.map(|row| row.id))
    }

    pub async fn get_tracks_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<Track>, DbError> {
        let rows = self.store.tracks_for_hackathon(hackathon_id).await?;
        debug!(hackathon_id, count = rows.len(), "loaded tracks");
        Ok(rows.into_iter().map(Track::from).collect())
    }

    /// Submissions newest first, optionally for a single track.
    pub async fn get_submissions_for_hackathon(
        &self,
        hackathon_id: i32,
        track_id: Option<i32>,
    ) -> Result<Vec<Submission>, DbError> {
        let rows = self
            .store
            .submissions_for_hackathon(hackathon_id, track_id)
            .await?;
        debug!(hackathon_id, ?track_id, count = rows.len(), "loaded submissions");
        Ok(rows.into_iter().map(Submission::from).collect())
    }

    pub async fn get_submission(&self, submission_id: i32) -> Result<Option<Submission>, DbError> {
        Ok(self
            .store
            .submission(submission_id)
            .await?
            .map(Submission::from))
    }

    /// Reviews newest first. An unknown submission has no reviews.
    pub async fn get_reviews_for_submission(
        &self,
        submission_id: i32,
    ) -> Result<Vec<Review>, DbError> {
        let rows = self.store.reviews_for_submission(submission_id).await?;
        debug!(submission_id, count = rows.len(), "loaded reviews");
        Ok(rows.into_iter().map(Review::from).collect())
    }

    /// Validate and store a review, returning it as it will be listed.
    pub async fn create_review(
        &self,
        submission_id: i32,
        input: ReviewSubmission,
    ) -> Result<Review, ComposeError> {
        let review = NewReview::new(submission_id, input)?;
        let row = self.store.insert_review(&review).await?;
        debug!(
            submission_id,
            review_id = row.id,
            hacker_id = review.hacker_id,
            "review created"
        );
        Ok(Review::from(row))
    }

    /// Sponsors ordered platinum, gold, silver, bronze, then untiered;
    /// ties by id.
    pub async fn get_sponsors_for_hackathon(
        &self,
        hackathon_id: i32,
    ) -> Result<Vec<Sponsor>, DbError> {
        let rows = self.store.sponsors_for_hackathon(hackathon_id).await?;
        let mut sponsors: Vec<Sponsor> = rows.into_iter().map(Sponsor::from).collect();
        sponsors.sort_by_key(|s| (SponsorTier::rank_of(s.tier), s.id));
        debug!(hackathon_id, count = sponsors.len(), "loaded sponsors");
        Ok(sponsors)
    }
}

fn compose_hackathon(
    row: HackathonRow,
    tracks: Vec<Track>,
    submission_count: i64,
    participant_count: i64,
) -> Result<Hackathon, DbError> {
    let status = HackathonStatus::parse(&row.status).ok_or_else(|| DbError::InvalidValue {
        column: "hackathons.status",
        value: row.status.clone(),
    })?;

    Ok(Hackathon {
        id: row.id,
        title: row.title,
        description: row.description,
        status,
        is_active: status.is_active(),
        start_date: row.start_date,
        end_date: row.end_date,
        submission_deadline: row.submission_deadline,
        prizes_total: row.prizes_total,
        submission_count,
        participant_count,
        tracks,
    })
}

impl From<TrackRow> for Track {
    fn from(row: TrackRow) -> Self {
        Self {
            id: row.id,
            prizes: prize_lines(row.prizes.as_deref()),
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            submission_count: row.submission_count,
        }
    }
}

impl From<SubmissionRow> for Submission {
    fn from(row: SubmissionRow) -> Self {
        Self {
            avg_rating: AvgRating::from_means(row.review_count, row.means),
            id: row.id,
            title: row.title,
            team_name: row.team_name,
            team_members: row.team_members,
            track_id: row.track_id,
            track_name: row.track_name,
            description: row.description,
            long_description: row.long_description,
            submission_date: row.submission_date,
            submission_url: row.submission_url,
            demo_url: row.demo_url,
            thumbnail_url: row.thumbnail_url,
            screenshot_urls: row.screenshot_urls,
            technologies: row.technologies,
            review_count: row.review_count,
        }
    }
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            user_id: row.hacker_id,
            user_name: row.hacker_name,
            submission_id: row.submission_id,
            date: row.created_at,
            ratings: row.ratings,
            comment: row.comment,
        }
    }
}

impl From<SponsorRow> for Sponsor {
    fn from(row: SponsorRow) -> Self {
        Self {
            id: row.id,
            tier: row.tier.as_deref().and_then(SponsorTier::parse),
            name: row.name,
            logo: row.logo_url,
            description: row.description,
            website_url: row.website_url,
            mission_statement: row.mission_statement,
        }
    }
}
