//! Route handlers organized by resource

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

pub mod hackathons;
pub mod health;
pub mod submissions;

/// Routes mounted under `/api/hackathons`
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(hackathons::router())
        .merge(submissions::router())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::composer::Composer;
    use crate::http::server::{build_router, ServerConfig};
    use crate::store::memory::MemoryStore;

    pub fn app(store: Arc<MemoryStore>) -> Router {
        router(store, &ServerConfig::default())
    }

    pub fn router(store: Arc<MemoryStore>, config: &ServerConfig) -> Router {
        build_router(Composer::new(store), config)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }
}
