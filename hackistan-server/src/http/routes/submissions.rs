//! Submission and review endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Review, ReviewSubmission, Submission};

/// GET /submissions/{id}
async fn get_submission(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Submission>, ApiError> {
    let submission = state
        .composer
        .get_submission(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Submission not found"))?;
    Ok(Json(submission))
}

/// GET /submissions/{id}/reviews - empty for an unknown submission
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(state.composer.get_reviews_for_submission(id).await?))
}

/// POST /submissions/{id}/reviews
async fn create_review(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(body): ValidJson<ReviewSubmission>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = state.composer.create_review(id, body).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Submission routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/submissions/{id}", get(get_submission))
        .route(
            "/submissions/{id}/reviews",
            get(list_reviews).post(create_review),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::json;

    use super::super::testing::{app, get, post_json};
    use crate::store::memory::MemoryStore;

    struct Fixture {
        store: Arc<MemoryStore>,
        submission: i32,
        reviewer: i32,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let id = store.add_hackathon("Hackistan", "active");
        let track = store.add_track(id, "Web Development");
        let reviewer = store.add_hacker("Jordan Lee");
        let submission = store.add_submission(id, track, "EcoTracker", Utc::now());
        Fixture {
            store,
            submission,
            reviewer,
        }
    }

    fn reviews_uri(submission: i32) -> String {
        format!("/api/hackathons/submissions/{submission}/reviews")
    }

    #[tokio::test]
    async fn reviews_for_unknown_submission_is_empty_list() {
        let f = fixture();
        let (status, body) = get(app(f.store), &reviews_uri(999_999)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn unknown_submission_is_404() {
        let f = fixture();
        let (status, body) = get(app(f.store), "/api/hackathons/submissions/999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Submission not found");
    }

    #[tokio::test]
    async fn malformed_id_is_400() {
        let f = fixture();
        let (status, _) = get(app(f.store), "/api/hackathons/submissions/abc/reviews").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_impact_is_400_naming_the_field() {
        let f = fixture();
        let body = json!({
            "hackerId": f.reviewer,
            "ratings": { "innovation": 4, "implementation": 4, "presentation": 4 },
            "comment": "Good"
        });

        let (status, body) = post_json(app(f.store), &reviews_uri(f.submission), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("impact"));
    }

    #[tokio::test]
    async fn out_of_range_rating_is_400() {
        let f = fixture();
        let body = json!({
            "hackerId": f.reviewer,
            "ratings": { "innovation": 6, "implementation": 4, "impact": 4, "presentation": 4 },
            "comment": "Good"
        });

        let (status, _) = post_json(app(f.store), &reviews_uri(f.submission), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_json_body_is_400() {
        let f = fixture();
        let (status, body) = post_json(app(f.store), &reviews_uri(f.submission), json!("nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn create_review_is_201_and_listed() {
        let f = fixture();
        let body = json!({
            "userId": f.reviewer,
            "ratings": { "innovation": 4.5, "implementation": 4, "impact": 3.5, "presentation": 5 },
            "comment": "Clean UI, strong demo"
        });

        let (status, created) =
            post_json(app(f.store.clone()), &reviews_uri(f.submission), body).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["id"].is_i64());
        assert_eq!(created["userId"], f.reviewer);
        assert_eq!(created["userName"], "Jordan Lee");
        assert_eq!(
            created["ratings"],
            json!({ "innovation": 4.5, "implementation": 4.0, "impact": 3.5, "presentation": 5.0 })
        );

        let (_, listed) = get(app(f.store.clone()), &reviews_uri(f.submission)).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], created["id"]);

        let (_, submission) = get(
            app(f.store),
            &format!("/api/hackathons/submissions/{}", f.submission),
        )
        .await;
        assert_eq!(submission["reviewCount"], 1);
        assert_eq!(submission["avgRating"]["overall"], 4.3);
    }

    #[tokio::test]
    async fn review_for_unknown_hacker_is_404() {
        let f = fixture();
        let body = json!({
            "hackerId": 424242,
            "ratings": { "innovation": 3, "implementation": 3, "impact": 3, "presentation": 3 },
            "comment": "Fine"
        });

        let (status, _) = post_json(app(f.store), &reviews_uri(f.submission), body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
