//! Client-side validation of the submission form.
//!
//! Turns the raw phone and count fields into a [`SubmissionRequest`] or the
//! first [`ValidationError`] found. Nothing is sent to the dispatch endpoint
//! unless this succeeds.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::requests::SubmissionRequest;

pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 200;

// ASCII digits only: `\d` in `regex` also matches Devanagari numerals.
static NEPAL_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(98|97)[0-9]{8}$").expect("phone pattern compiles"));

/// Reasons a form submission is rejected before any request is made.
///
/// The `Display` text is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid Nepal number (98XXXXXXXX or 97XXXXXXXX)")]
    InvalidPhoneFormat,
    #[error("SMS count must be between {} and {}", MIN_COUNT, MAX_COUNT)]
    CountOutOfRange,
    /// The count field is not a base-10 integer.
    #[error("SMS count must be between {} and {}", MIN_COUNT, MAX_COUNT)]
    InvalidCount,
}

/// Validates the raw form fields.
///
/// Checks run in order: missing field, phone format, count. The phone is
/// matched as typed; padding makes it invalid. The count is trimmed and parsed
/// as a base-10 integer; anything that is not an integer is `InvalidCount`,
/// never coerced.
pub fn validate(phone: &str, count_raw: &str) -> Result<SubmissionRequest, ValidationError> {
    if phone.is_empty() || count_raw.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !NEPAL_MOBILE.is_match(phone) {
        return Err(ValidationError::InvalidPhoneFormat);
    }
    let count = parse_count(count_raw.trim())?;

    Ok(SubmissionRequest::new(phone.to_string(), count))
}

fn parse_count(raw: &str) -> Result<u32, ValidationError> {
    let value = raw.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::CountOutOfRange,
        _ => ValidationError::InvalidCount,
    })?;

    u32::try_from(value)
        .ok()
        .filter(|count| (MIN_COUNT..=MAX_COUNT).contains(count))
        .ok_or(ValidationError::CountOutOfRange)
}
