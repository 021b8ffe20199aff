//! In-memory store for tests
//!
//! Mirrors the SQL semantics of `PgStore`: LEFT JOIN counts, newest-first
//! ordering, per-category averages, and foreign-key checks on insert.
//! Sponsors come back in id order, leaving tier ordering to the composer.
//! Calls can be made to fail or to stall, for error and timeout paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::HackathonStore;
use crate::db::{DbError, HackathonRow, ReviewRow, SponsorRow, SubmissionRow, TrackRow};
use crate::models::{CategoryMeans, NewReview};

/// Seconds since epoch used as the base for generated review timestamps
const CLOCK_BASE: i64 = 1_750_000_000;

#[derive(Default)]
struct Data {
    next_id: i32,
    hackathons: Vec<HackathonRow>,
    tracks: Vec<(i32, TrackRow)>,
    hackers: Vec<(i32, String)>,
    registrations: Vec<(i32, i32)>,
    submissions: Vec<(i32, SubmissionRow)>,
    reviews: Vec<ReviewRow>,
    sponsors: Vec<(SponsorRow, Vec<i32>)>,
}

impl Data {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn compose_submission(&self, row: &SubmissionRow) -> SubmissionRow {
        let ratings: Vec<_> = self
            .reviews
            .iter()
            .filter(|r| r.submission_id == row.id)
            .map(|r| r.ratings)
            .collect();
        let (review_count, means) = CategoryMeans::from_ratings(&ratings);

        let track_name = row.track_id.and_then(|track_id| {
            self.tracks
                .iter()
                .find(|(_, t)| t.id == track_id)
                .map(|(_, t)| t.title.clone())
        });

        SubmissionRow {
            track_name,
            review_count,
            means,
            ..row.clone()
        }
    }
}

/// In-memory `HackathonStore`
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Data>,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a driver error.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent call wait before answering.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    async fn check(&self) -> Result<(), DbError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    pub fn add_hackathon(&self, title: &str, status: &str) -> i32 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.hackathons.push(HackathonRow {
            id,
            title: title.to_owned(),
            description: Some(format!("{title} description")),
            status: status.to_owned(),
            start_date: None,
            end_date: None,
            submission_deadline: None,
            prizes_total: Some(10_000.0),
        });
        id
    }

    pub fn add_track(&self, hackathon_id: i32, name: &str) -> i32 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.tracks.push((
            hackathon_id,
            TrackRow {
                id,
                title: name.to_owned(),
                description: None,
                prizes: Some("1st Place: $3,000\n2nd Place: $1,500".to_owned()),
                requirements: vec![],
                submission_count: 0,
            },
        ));
        id
    }

    pub fn add_hacker(&self, name: &str) -> i32 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.hackers.push((id, name.to_owned()));
        id
    }

    pub fn register(&self, hackathon_id: i32, hacker_id: i32) {
        let mut data = self.data.lock().unwrap();
        if !data.registrations.contains(&(hackathon_id, hacker_id)) {
            data.registrations.push((hackathon_id, hacker_id));
        }
    }

    pub fn add_submission(
        &self,
        hackathon_id: i32,
        track_id: i32,
        title: &str,
        submitted_at: DateTime<Utc>,
    ) -> i32 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.submissions.push((
            hackathon_id,
            SubmissionRow {
                id,
                title: title.to_owned(),
                team_name: Some(format!("Team {title}")),
                team_members: vec![],
                track_id: Some(track_id),
                track_name: None,
                description: None,
                long_description: None,
                submission_date: submitted_at,
                submission_url: None,
                demo_url: None,
                thumbnail_url: None,
                screenshot_urls: vec![],
                technologies: vec![],
                review_count: 0,
                means: CategoryMeans::default(),
            },
        ));
        id
    }

    pub fn add_sponsor(&self, hackathon_id: i32, name: &str, tier: Option<&str>) -> i32 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.sponsors.push((
            SponsorRow {
                id,
                name: name.to_owned(),
                tier: tier.map(str::to_owned),
                logo_url: None,
                description: None,
                website_url: None,
                mission_statement: None,
            },
            vec![hackathon_id],
        ));
        id
    }
}

#[async_trait]
impl HackathonStore for MemoryStore {
    async fn active_hackathon(&self) -> Result<Option<HackathonRow>, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        Ok(data
            .hackathons
            .iter()
            .filter(|h| h.status == "active")
            .max_by_key(|h| h.id)
            .cloned())
    }

    async fn tracks_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<TrackRow>, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        let mut tracks: Vec<TrackRow> = data
            .tracks
            .iter()
            .filter(|(h, _)| *h == hackathon_id)
            .map(|(_, t)| TrackRow {
                submission_count: data
                    .submissions
                    .iter()
                    .filter(|(_, s)| s.track_id == Some(t.id))
                    .count() as i64,
                ..t.clone()
            })
            .collect();
        tracks.sort_by_key(|t| t.id);
        Ok(tracks)
    }

    async fn submission_count(&self, hackathon_id: i32) -> Result<i64, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        Ok(data
            .submissions
            .iter()
            .filter(|(h, _)| *h == hackathon_id)
            .count() as i64)
    }

    async fn participant_count(&self, hackathon_id: i32) -> Result<i64, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        Ok(data
            .registrations
            .iter()
            .filter(|(h, _)| *h == hackathon_id)
            .count() as i64)
    }

    async fn submissions_for_hackathon(
        &self,
        hackathon_id: i32,
        track_id: Option<i32>,
    ) -> Result<Vec<SubmissionRow>, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        let mut rows: Vec<SubmissionRow> = data
            .submissions
            .iter()
            .filter(|(h, s)| *h == hackathon_id && track_id.map_or(true, |t| s.track_id == Some(t)))
            .map(|(_, s)| data.compose_submission(s))
            .collect();
        rows.sort_by(|a, b| {
            b.submission_date
                .cmp(&a.submission_date)
                .then(b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn submission(&self, submission_id: i32) -> Result<Option<SubmissionRow>, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        Ok(data
            .submissions
            .iter()
            .find(|(_, s)| s.id == submission_id)
            .map(|(_, s)| data.compose_submission(s)))
    }

    async fn reviews_for_submission(&self, submission_id: i32) -> Result<Vec<ReviewRow>, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        let mut reviews: Vec<ReviewRow> = data
            .reviews
            .iter()
            .filter(|r| r.submission_id == submission_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(reviews)
    }

    async fn insert_review(&self, review: &NewReview) -> Result<ReviewRow, DbError> {
        self.check().await?;
        let mut data = self.data.lock().unwrap();

        if !data.submissions.iter().any(|(_, s)| s.id == review.submission_id) {
            return Err(DbError::not_found("submission", review.submission_id));
        }
        let hacker_name = data
            .hackers
            .iter()
            .find(|(id, _)| *id == review.hacker_id)
            .map(|(_, name)| name.clone())
            .ok_or_else(|| DbError::not_found("hacker", review.hacker_id))?;

        let id = data.next_id();
        let row = ReviewRow {
            id,
            submission_id: review.submission_id,
            hacker_id: Some(review.hacker_id),
            hacker_name: Some(hacker_name),
            ratings: review.ratings,
            comment: review.comment.clone(),
            created_at: DateTime::from_timestamp(CLOCK_BASE + i64::from(id), 0)
                .unwrap_or_default(),
        };
        data.reviews.push(row.clone());
        Ok(row)
    }

    async fn sponsors_for_hackathon(&self, hackathon_id: i32) -> Result<Vec<SponsorRow>, DbError> {
        self.check().await?;
        let data = self.data.lock().unwrap();
        Ok(data
            .sponsors
            .iter()
            .filter(|(_, hackathons)| hackathons.contains(&hackathon_id))
            .map(|(s, _)| s.clone())
            .collect())
    }
}
