//! Client side of the waitlist signup.
//!
//! This crate provides:
//!
//! - **Local validation** - incomplete fields and malformed emails never reach the network
//! - **Submission workflow** - confirmation mail first, then the waitlist insert, short-circuiting
//!   on the first failure
//! - **Signup form state** - the fields, a pending indicator and the last notification to show
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use waitlist_sdk::{ClientConfig, SignupForm, SubmissionWorkflow};
//!
//! let config = ClientConfig::new("https://example.com/api/")?;
//! let workflow = Arc::new(SubmissionWorkflow::from_config(&config)?);
//!
//! let mut form = SignupForm::new(workflow);
//! form.set_name("Ada");
//! form.set_email("ada@example.com");
//!
//! let status = form.submit().await;
//! println!("{}", status.message().unwrap_or_default());
//! ```

mod config;
mod error;
mod form;
mod transport;
mod validate;
mod workflow;

pub use config::ClientConfig;
pub use error::{ConfigError, SubmitError, TransportError, ValidationError};
pub use form::{PENDING_MESSAGE, SUCCESS_MESSAGE, SignupForm, SubmissionStatus};
#[cfg(feature = "client")]
pub use transport::HttpWaitlistApi;
pub use transport::WaitlistApi;
pub use validate::{is_valid_email, validate_signup};
pub use workflow::{PendingIndicator, SubmissionWorkflow, Submitted};

// Re-export shared types for convenience
pub use waitlist_types::{JoinRequest, WaitlistEntry};
