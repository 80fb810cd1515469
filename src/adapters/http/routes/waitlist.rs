use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use waitlist_types::{CreatedResponse, messages};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::WaitlistUseCases,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

// ============================================================================
// Request Types
// ============================================================================

/// Both fields are optional so a missing one is reported like an empty one.
#[derive(Deserialize)]
struct JoinPayload {
    name: Option<String>,
    email: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /waitlist
/// Adds a visitor to the waitlist and returns the stored entry.
async fn join_waitlist(
    State(use_cases): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<JoinPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable waitlist payload");
        AppError::InvalidInput(messages::NAME_AND_EMAIL_REQUIRED.into())
    })?;

    let entry = use_cases
        .join(payload.name.as_deref(), payload.email.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(entry))))
}
