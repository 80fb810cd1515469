use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::{ErrorResponse, messages};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match self {
            AppError::InvalidInput(msg) => {
                tracing::debug!(code = code.as_str(), message = %msg, "Rejected request");
                error_resp(StatusCode::BAD_REQUEST, msg)
            }
            AppError::AlreadyOnWaitlist => {
                tracing::debug!(code = code.as_str(), "Rejected duplicate signup");
                error_resp(StatusCode::CONFLICT, messages::ALREADY_ON_WAITLIST.into())
            }
            // Logged with the driver detail where it was mapped.
            AppError::Database(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, messages::FAILED_TO_ADD.into())
            }
        }
    }
}

fn error_resp(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
