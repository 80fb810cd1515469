use std::sync::Arc;

use crate::{error::SubmitError, workflow::SubmissionWorkflow};

pub const PENDING_MESSAGE: &str = "Getting you on the waitlist...";
pub const SUCCESS_MESSAGE: &str = "You're on the waitlist! Welcome aboard ✨";

/// What the signup form currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded {
        name: String,
    },
    Failed(SubmitError),
}

impl SubmissionStatus {
    /// Notification text for this status; `None` while idle.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Pending => Some(PENDING_MESSAGE),
            SubmissionStatus::Succeeded { .. } => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Failed(err) => Some(err.user_message()),
        }
    }
}

/// Field values and notification state of one signup form.
pub struct SignupForm {
    workflow: Arc<SubmissionWorkflow>,
    name: String,
    email: String,
    last: SubmissionStatus,
}

impl SignupForm {
    pub fn new(workflow: Arc<SubmissionWorkflow>) -> Self {
        Self {
            workflow,
            name: String::new(),
            email: String::new(),
            last: SubmissionStatus::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_pending(&self) -> bool {
        self.workflow.pending().is_pending()
    }

    /// The submit trigger is disabled while a submission is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.is_pending() {
            SubmissionStatus::Pending
        } else {
            self.last.clone()
        }
    }

    /// Submit the current fields. The fields are cleared only on success.
    pub async fn submit(&mut self) -> SubmissionStatus {
        self.last = match self.workflow.submit(&self.name, &self.email).await {
            Ok(submitted) => {
                self.name.clear();
                self.email.clear();
                SubmissionStatus::Succeeded {
                    name: submitted.name,
                }
            }
            Err(err) => SubmissionStatus::Failed(err),
        };

        self.last.clone()
    }
}
