//! In-memory mock implementations of the waitlist repository.

use async_trait::async_trait;
use std::sync::Mutex;
use waitlist_types::WaitlistEntry;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
};

struct State {
    entries: Vec<WaitlistEntry>,
    next_id: i32,
}

/// In-memory implementation of WaitlistRepo for testing.
///
/// Mirrors the Postgres table: ids come from a sequence that also advances on
/// a rejected insert, and email is an exact-match unique key.
pub struct InMemoryWaitlistRepo {
    state: Mutex<State>,
}

impl Default for InMemoryWaitlistRepo {
    fn default() -> Self {
        Self::with_entries(vec![])
    }
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with existing entries.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State { entries, next_id }),
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.state.lock().unwrap().entries.clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, name: &str, email: &str) -> AppResult<WaitlistEntry> {
        let mut state = self.state.lock().unwrap();

        let id = state.next_id;
        state.next_id += 1;

        if state.entries.iter().any(|e| e.email == email) {
            return Err(AppError::AlreadyOnWaitlist);
        }

        let entry = WaitlistEntry {
            id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        state.entries.push(entry.clone());
        Ok(entry)
    }
}

/// Repo whose every insert fails like a lost database connection.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _name: &str, _email: &str) -> AppResult<WaitlistEntry> {
        Err(AppError::Database("Database operation failed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = InMemoryWaitlistRepo::new();

        let first = repo.insert("A", "a@example.com").await.unwrap();
        let second = repo.insert("B", "b@example.com").await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn email_uniqueness_is_case_sensitive() {
        let repo = InMemoryWaitlistRepo::new();

        repo.insert("A", "a@example.com").await.unwrap();
        repo.insert("A", "A@example.com").await.unwrap();

        assert_eq!(repo.get_all().len(), 2);
    }
}
