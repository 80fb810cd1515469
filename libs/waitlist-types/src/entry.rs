use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A waitlist signup as stored and returned by the insert endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    /// Store-assigned identity, monotonically increasing
    pub id: i32,

    pub name: String,

    /// Unique across all entries
    pub email: String,

    /// Insertion time, never updated
    pub created_at: NaiveDateTime,
}

/// Body posted to `/notify` and `/waitlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub name: String,
    pub email: String,
}

impl JoinRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
