use crate::domain::value::ErrorCode;

/// Decoded `rest/send` response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SendResponse {
    /// Message id, either the one sent in the request or assigned by the gateway.
    pub id: i64,
    /// Number of SMS parts, or call duration in seconds for voice messages.
    pub cnt: i32,
    pub cost: String,
    pub balance: String,
    pub error: String,
    pub error_code: ErrorCode,
    pub phones: Vec<RecipientResult>,
}

/// Per-recipient outcome nested in a [`SendResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipientResult {
    pub phone: String,
    /// Country code followed by the operator code.
    pub mccmnc: String,
    pub cost: String,
    pub status: String,
    pub error: String,
}

impl SendResponse {
    /// Whether the gateway reported a top-level error.
    pub fn has_error(&self) -> bool {
        !self.error.is_empty() || self.error_code.is_error()
    }

    /// First recipient whose delivery was rejected.
    pub fn first_recipient_error(&self) -> Option<&RecipientResult> {
        self.phones.iter().find(|phone| !phone.error.is_empty())
    }
}
