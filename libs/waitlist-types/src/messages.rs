//! Error messages returned in `ErrorResponse::error`.

pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and email are required";
pub const ALREADY_ON_WAITLIST: &str = "This email is already on the waitlist";
pub const FAILED_TO_ADD: &str = "Failed to add to waitlist";
