use thiserror::Error;

/// Input rejected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name or email is empty")]
    IncompleteFields,

    #[error("Email address is malformed")]
    InvalidEmail,
}

/// Why a signup submission did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Another submission on the same workflow has not finished yet
    #[error("A submission is already in flight")]
    InFlight,

    /// Either endpoint answered 429
    #[error("Rate limited")]
    RateLimited,

    /// Confirmation mail endpoint failed or was unreachable
    #[error("Confirmation email could not be sent")]
    NotificationFailed,

    /// Insert endpoint answered 409
    #[error("Email is already on the waitlist")]
    AlreadyRegistered,

    /// Insert endpoint failed or was unreachable
    #[error("Waitlist entry could not be saved")]
    PersistenceFailed,
}

impl SubmitError {
    /// The notification shown to the visitor for this outcome.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Validation(ValidationError::IncompleteFields) => {
                "Please complete all fields"
            }
            SubmitError::Validation(ValidationError::InvalidEmail) => {
                "Please enter a valid email address"
            }
            SubmitError::InFlight => "Your signup is already being processed",
            SubmitError::RateLimited => "Please try again in a few minutes",
            SubmitError::NotificationFailed => {
                "We couldn't send you a confirmation email. Please try again."
            }
            SubmitError::AlreadyRegistered => "You're already on our waitlist!",
            SubmitError::PersistenceFailed => "Something went wrong. Please try again.",
        }
    }

    /// Whether resubmitting the same input can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmitError::InFlight
                | SubmitError::RateLimited
                | SubmitError::NotificationFailed
                | SubmitError::PersistenceFailed
        )
    }
}

/// Failure to get any HTTP status back from an endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Invalid(String),
}
