use axum::{Json, Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
/// Liveness probe; does not touch the database.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::*;
    use crate::test_utils::{FailingWaitlistRepo, TestAppStateBuilder};

    #[tokio::test]
    async fn health_is_ok_even_when_store_is_down() {
        let app_state = TestAppStateBuilder::new()
            .with_repo(std::sync::Arc::new(FailingWaitlistRepo))
            .build();
        let server = TestServer::new(router().with_state(app_state)).unwrap();

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}
