use crate::domain::value::PhoneNumber;

/// Parameters of a single `rest/send` call.
///
/// Required: `login`, `password`, and either `phones` + `message` or `list`.
/// Every other field is optional; an empty string or zero means "unset" and
/// the field is left out of the request body.
///
/// A `Request` is plain data. Call [`Request::validate`] (the client does this
/// on every send) to check it against the gateway's documented domains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub login: String,
    pub password: String,
    /// Comma-separated recipient numbers in international format.
    pub phones: String,

    pub message: String,
    /// Pre-built batch, one `phone:text` pair per line. Replaces `phones` + `message`.
    pub list: String,

    pub id: String,
    pub sender: String,
    pub translit: i32,
    pub tinyurl: i32,
    /// Scheduled send time. See [`Request::validate`] for accepted formats.
    pub time: String,
    pub tz: i32,
    /// Distribution window in hours.
    pub period: f64,
    /// Send interval in minutes.
    pub freq: i32,
    pub flash: i32,
    /// Binary message flag: 1 for binary, 2 for hex-encoded binary.
    pub bin: i32,
    pub push: i32,
    pub hlr: i32,
    pub ping: i32,
    pub mms: i32,
    pub mail: i32,
    pub soc: i32,
    pub viber: i32,
    pub whatsapp: i32,
    pub bot: String,
    pub smsreq: i32,
    pub fileurl: String,
    pub call: i32,
    pub voice: String,
    /// Voice call settings as `interval,timeout,attempts`.
    pub param: String,
    pub subject: String,
    pub charset: String,
    /// Cost reporting mode.
    pub cost: i32,
    /// Response format.
    pub format: i32,
    /// Message lifetime as `hh:mm`.
    pub valid: String,
    pub max_sms: i32,
    pub img_code: String,
    pub user_ip: String,
    pub err: i32,
    pub op: i32,
    pub pp: String,
}

impl Request {
    /// Send `message` to the comma-separated `phones`.
    pub fn to_phones(phones: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phones: phones.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Send `message` to already parsed numbers, written in E.164 form.
    pub fn to_numbers(numbers: &[PhoneNumber], message: impl Into<String>) -> Self {
        let phones = numbers
            .iter()
            .map(PhoneNumber::e164)
            .collect::<Vec<_>>()
            .join(",");
        Self::to_phones(phones, message)
    }

    /// Pre-built `list` of `phone:text` lines.
    pub fn from_list(list: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            ..Default::default()
        }
    }

    /// Whether both credentials are unset.
    pub fn lacks_credentials(&self) -> bool {
        self.login.is_empty() && self.password.is_empty()
    }
}
