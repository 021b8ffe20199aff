//! Custom Axum extractors
//!
//! Path ids, the `trackId` filter and JSON bodies all reject with a 400
//! carrying a readable message instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract an integer id from the path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        let id = parse_id("id", &id)?;
        Ok(Self(id))
    }
}

#[derive(Deserialize)]
struct TrackParams {
    #[serde(rename = "trackId")]
    track_id: Option<String>,
}

/// Optional `?trackId=` filter; an empty value means no filter
pub struct TrackFilter(pub Option<i32>);

impl<S> FromRequestParts<S> for TrackFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<TrackParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        let track_id = match params.track_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_id("trackId", raw)?),
        };
        Ok(Self(track_id))
    }
}

/// JSON body whose rejection is a 400 in the API's error format
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;
        Ok(Self(value))
    }
}

fn parse_id(field: &'static str, raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field,
            reason: "must be an integer",
        })
    })
}
