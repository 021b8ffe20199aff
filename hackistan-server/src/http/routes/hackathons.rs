//! Active hackathon endpoints
//!
//! Everything here is scoped to the single active hackathon; without one
//! every route is a 404.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::TrackFilter;
use crate::http::server::AppState;
use crate::models::{Hackathon, Sponsor, Submission, Track};

async fn active_id(state: &AppState) -> Result<i32, ApiError> {
    state
        .composer
        .active_hackathon_id()
        .await?
        .ok_or_else(ApiError::no_active_hackathon)
}

/// GET /active - the active hackathon with tracks and counts
async fn get_active(State(state): State<Arc<AppState>>) -> Result<Json<Hackathon>, ApiError> {
    let hackathon = state
        .composer
        .get_active_hackathon()
        .await?
        .ok_or_else(ApiError::no_active_hackathon)?;
    Ok(Json(hackathon))
}

/// GET /active/tracks
async fn get_tracks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Track>>, ApiError> {
    let id = active_id(&state).await?;
    Ok(Json(state.composer.get_tracks_for_hackathon(id).await?))
}

/// GET /active/submissions?trackId=
async fn get_submissions(
    State(state): State<Arc<AppState>>,
    TrackFilter(track_id): TrackFilter,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let id = active_id(&state).await?;
    Ok(Json(
        state
            .composer
            .get_submissions_for_hackathon(id, track_id)
            .await?,
    ))
}

/// GET /active/sponsors
async fn get_sponsors(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Sponsor>>, ApiError> {
    let id = active_id(&state).await?;
    Ok(Json(state.composer.get_sponsors_for_hackathon(id).await?))
}

/// Active hackathon routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/active", get(get_active))
        .route("/active/tracks", get(get_tracks))
        .route("/active/submissions", get(get_submissions))
        .route("/active/sponsors", get(get_sponsors))
}
