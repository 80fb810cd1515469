//! Wire types shared by the waitlist service and its client.
//!
//! This crate provides:
//! - The stored `WaitlistEntry` as it appears on the wire
//! - The join request body sent to both the notification and insert endpoints
//! - Response envelopes and the server's error messages

mod entry;
pub mod messages;
mod responses;

pub use entry::{JoinRequest, WaitlistEntry};
pub use responses::{CreatedResponse, ErrorResponse};
