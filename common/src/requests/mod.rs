use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Request payload for the SMS dispatch endpoint (`POST /send_sms`).
///
/// Values are only produced by [`crate::validation::validate`], so `phone` is
/// always a 10-digit Nepal mobile number starting with 98 or 97 and `count`
/// lies in `MIN_COUNT..=MAX_COUNT`. Serialized as `{"phone": "...", "count": N}`.
pub struct SubmissionRequest {
    phone: String,
    count: u32,
}

impl SubmissionRequest {
    pub(crate) fn new(phone: String, count: u32) -> Self {
        Self { phone, count }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
