use std::sync::Arc;

use async_trait::async_trait;
use waitlist_types::{WaitlistEntry, messages};

use crate::app_error::{AppError, AppResult};

// ============================================================================
// Repository Trait
// ============================================================================

/// Append-only store of waitlist entries keyed by unique email.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Insert a new entry, returning it with its generated `id` and `created_at`.
    /// A duplicate email yields `AppError::AlreadyOnWaitlist` and writes nothing.
    async fn insert(&self, name: &str, email: &str) -> AppResult<WaitlistEntry>;
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Add a visitor to the waitlist.
    ///
    /// Both fields must be present and non-empty; the uniqueness of `email`
    /// is left to the store.
    pub async fn join(&self, name: Option<&str>, email: Option<&str>) -> AppResult<WaitlistEntry> {
        let (Some(name), Some(email)) = (non_empty(name), non_empty(email)) else {
            return Err(AppError::InvalidInput(messages::NAME_AND_EMAIL_REQUIRED.into()));
        };

        let entry = self.repo.insert(name, email).await?;

        tracing::info!(entry_id = entry.id, "Added to waitlist");
        Ok(entry)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
