//! Composed read models, serialized as the frontend's JSON contract

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::rating::{AvgRating, Ratings};
use super::status::HackathonStatus;
use super::tier::SponsorTier;

/// Hackathon with its tracks and live counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: HackathonStatus,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub submission_deadline: Option<DateTime<Utc>>,
    pub prizes_total: Option<f64>,
    pub submission_count: i64,
    pub participant_count: i64,
    pub tracks: Vec<Track>,
}

/// Track with a live submission count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub prizes: Vec<String>,
    pub requirements: Vec<String>,
    pub submission_count: i64,
}

/// Submission with joined track name and derived ratings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
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
    pub avg_rating: Option<AvgRating>,
    pub review_count: i64,
}

/// Review with the reviewer's display name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    pub submission_id: i32,
    pub date: DateTime<Utc>,
    pub ratings: Ratings,
    pub comment: String,
}

/// Sponsor (ally) of a hackathon
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: i32,
    pub name: String,
    pub tier: Option<SponsorTier>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub mission_statement: Option<String>,
}

/// Split stored prize text ("1st Place: $3,000\n2nd Place: …") into lines.
pub fn prize_lines(text: Option<&str>) -> Vec<String> {
    text.map(|t| {
        t.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}
