use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use waitlist_types::JoinRequest;

use crate::{
    error::{SubmitError, TransportError},
    transport::WaitlistApi,
    validate::validate_signup,
};

const TOO_MANY_REQUESTS: u16 = 429;
const CONFLICT: u16 = 409;

/// Shared view of whether a submission is in flight.
///
/// Cloning yields another handle to the same flag, so a UI can poll it while
/// the workflow runs.
#[derive(Debug, Clone, Default)]
pub struct PendingIndicator(Arc<AtomicBool>);

impl PendingIndicator {
    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Claim the flag; `None` if it is already set.
    fn begin(&self) -> Option<PendingGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingGuard { flag: &self.0 })
    }
}

/// Clears the pending flag when the submission finishes or is dropped.
struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// A completed signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub name: String,
}

/// Validates a signup, sends the confirmation mail, then records the entry.
///
/// Allows one submission in flight at a time.
pub struct SubmissionWorkflow {
    api: Arc<dyn WaitlistApi>,
    pending: PendingIndicator,
}

impl SubmissionWorkflow {
    pub fn new(api: Arc<dyn WaitlistApi>) -> Self {
        Self {
            api,
            pending: PendingIndicator::default(),
        }
    }

    /// Build a workflow talking HTTP to the endpoints in `config`.
    #[cfg(feature = "client")]
    pub fn from_config(config: &crate::ClientConfig) -> Result<Self, crate::ConfigError> {
        let api = crate::transport::HttpWaitlistApi::new(config)?;
        Ok(Self::new(Arc::new(api)))
    }

    pub fn pending(&self) -> PendingIndicator {
        self.pending.clone()
    }

    /// Run a signup.
    ///
    /// Invalid input fails without any network call. Otherwise the
    /// confirmation endpoint is called first and the insert endpoint only if
    /// that succeeded. A confirmation that went out before a failed insert is
    /// not recalled.
    pub async fn submit(&self, name: &str, email: &str) -> Result<Submitted, SubmitError> {
        validate_signup(name, email)?;

        let Some(_pending) = self.pending.begin() else {
            tracing::debug!("Signup refused, another submission is in flight");
            return Err(SubmitError::InFlight);
        };

        let request = JoinRequest::new(name, email);

        self.send_confirmation(&request).await?;

        if let Err(err) = self.persist_entry(&request).await {
            if err != SubmitError::AlreadyRegistered {
                tracing::warn!(
                    error = %err,
                    "Confirmation sent but waitlist entry was not saved"
                );
            }
            return Err(err);
        }

        tracing::debug!("Signup completed");
        Ok(Submitted {
            name: request.name,
        })
    }

    async fn send_confirmation(&self, request: &JoinRequest) -> Result<(), SubmitError> {
        let result = self.api.notify(request).await;
        check_phase("notify", result, SubmitError::NotificationFailed, |status| {
            match status {
                TOO_MANY_REQUESTS => SubmitError::RateLimited,
                _ => SubmitError::NotificationFailed,
            }
        })
    }

    async fn persist_entry(&self, request: &JoinRequest) -> Result<(), SubmitError> {
        let result = self.api.create_entry(request).await;
        check_phase("waitlist", result, SubmitError::PersistenceFailed, |status| {
            match status {
                TOO_MANY_REQUESTS => SubmitError::RateLimited,
                CONFLICT => SubmitError::AlreadyRegistered,
                _ => SubmitError::PersistenceFailed,
            }
        })
    }
}

/// 2xx passes; any other status goes through `on_status`; a transport
/// failure (timeouts included) becomes `on_transport`.
fn check_phase(
    phase: &'static str,
    result: Result<u16, TransportError>,
    on_transport: SubmitError,
    on_status: impl FnOnce(u16) -> SubmitError,
) -> Result<(), SubmitError> {
    match result {
        Ok(status) if (200..300).contains(&status) => {
            tracing::debug!(phase, status, "Phase succeeded");
            Ok(())
        }
        Ok(status) => {
            let err = on_status(status);
            tracing::debug!(phase, status, error = %err, "Phase rejected");
            Err(err)
        }
        Err(err) => {
            tracing::warn!(phase, error = %err, "Phase transport failure");
            Err(on_transport)
        }
    }
}
