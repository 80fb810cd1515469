//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates an `AppState` backed by in-memory mocks so
//! routes can be exercised with `axum_test::TestServer`.

use std::sync::Arc;

use secrecy::SecretString;
use waitlist_types::WaitlistEntry;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo) = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "taken@example.com".into()))
///     .build_with_repo();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing entry.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Replace the in-memory repo (e.g. with `FailingWaitlistRepo`).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Build the state and hand back the in-memory repo for assertions.
    pub fn build_with_repo(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(self.entries));
        let app_state = Self {
            entries: vec![],
            repo: Some(repo.clone() as Arc<dyn WaitlistRepo>),
        }
        .build();
        (app_state, repo)
    }

    pub fn build(self) -> AppState {
        let repo: Arc<dyn WaitlistRepo> = match self.repo {
            Some(repo) => repo,
            None => Arc::new(InMemoryWaitlistRepo::with_entries(self.entries)),
        };

        AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo)),
        }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        database_url: SecretString::from(String::from("postgres://localhost/waitlist_test")),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: axum::http::HeaderValue::from_static("http://localhost:3000"),
        db_max_connections: 1,
        log_file: "app.log".to_string(),
    }
}
