use serde::{Deserialize, Serialize};

use crate::WaitlistEntry;

/// Body of a `201 Created` from the insert endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub data: WaitlistEntry,
}

impl CreatedResponse {
    pub fn new(data: WaitlistEntry) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of every non-2xx response from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
