use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSC.RU account login.
///
/// Invariant: non-empty after trimming.
pub struct Login(String);

impl Login {
    /// JSON key used by SMSC.RU (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated login.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMSC.RU account password (or API key used in its place).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` output never shows the value.
pub struct Password(String);

impl Password {
    /// JSON key used by SMSC.RU (`psw`).
    pub const FIELD: &'static str = "psw";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name (`sender`).
///
/// Invariant: non-empty after trimming. The name must be registered in your SMSC.RU account.
pub struct SenderId(String);

impl SenderId {
    /// JSON key used by SMSC.RU (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// JSON key used by SMSC.RU (`phones`).
    pub const FIELD: &'static str = "phones";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// SMSC.RU `error_code` from a send response.
///
/// This value is preserved as-is even when the code is unknown to this crate.
/// Zero means "no error".
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMSC.RU.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` unless the code is zero.
    pub fn is_error(self) -> bool {
        self.0 != 0
    }

    /// Map this code to a known error code variant, if one exists.
    pub fn known(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Human-readable description for known codes.
    pub fn description(self) -> Option<&'static str> {
        self.known().map(KnownErrorCode::description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Error codes documented by SMSC.RU for the send method.
pub enum KnownErrorCode {
    BadRequest,
    InvalidCredentials,
    InsufficientFunds,
    IpBlocked,
    InvalidDateFormat,
    MessageForbidden,
    InvalidPhoneNumber,
    MessageNotDelivered,
    DuplicateRequest,
}

impl KnownErrorCode {
    /// Every known code, in numeric order.
    pub const ALL: [Self; 9] = [
        Self::BadRequest,
        Self::InvalidCredentials,
        Self::InsufficientFunds,
        Self::IpBlocked,
        Self::InvalidDateFormat,
        Self::MessageForbidden,
        Self::InvalidPhoneNumber,
        Self::MessageNotDelivered,
        Self::DuplicateRequest,
    ];

    /// Convert a raw SMSC.RU integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::BadRequest,
            2 => Self::InvalidCredentials,
            3 => Self::InsufficientFunds,
            4 => Self::IpBlocked,
            5 => Self::InvalidDateFormat,
            6 => Self::MessageForbidden,
            7 => Self::InvalidPhoneNumber,
            8 => Self::MessageNotDelivered,
            9 => Self::DuplicateRequest,
            _ => return None,
        })
    }

    /// Integer code as sent by SMSC.RU.
    pub fn code(self) -> i32 {
        match self {
            Self::BadRequest => 1,
            Self::InvalidCredentials => 2,
            Self::InsufficientFunds => 3,
            Self::IpBlocked => 4,
            Self::InvalidDateFormat => 5,
            Self::MessageForbidden => 6,
            Self::InvalidPhoneNumber => 7,
            Self::MessageNotDelivered => 8,
            Self::DuplicateRequest => 9,
        }
    }

    /// Human-readable meaning of the code.
    pub fn description(self) -> &'static str {
        match self {
            Self::BadRequest => "invalid request parameters",
            Self::InvalidCredentials => "invalid login or password",
            Self::InsufficientFunds => "insufficient funds on the account",
            Self::IpBlocked => "IP address is temporarily blocked",
            Self::InvalidDateFormat => "invalid date format",
            Self::MessageForbidden => "message is forbidden",
            Self::InvalidPhoneNumber => "invalid phone number format",
            Self::MessageNotDelivered => "message cannot be delivered",
            Self::DuplicateRequest => "duplicate request",
        }
    }

    /// Whether this code indicates invalid credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let login = Login::new(" user ").unwrap();
        assert_eq!(login.as_str(), "user");
        assert!(Login::new("").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let sender = SenderId::new(" sender ").unwrap();
        assert_eq!(sender.as_str(), "sender");
        assert!(SenderId::new("  ").is_err());
    }

    #[test]
    fn password_debug_hides_value() {
        let password = Password::new("hunter2").unwrap();
        assert!(!format!("{password:?}").contains("hunter2"));
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+79251234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+7 925 123-45-67").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+79251234567");
        assert_eq!(p2.raw(), "+7 925 123-45-67");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
        assert!(matches!(
            PhoneNumber::parse(None, "  "),
            Err(ValidationError::Empty {
                field: PhoneNumber::FIELD
            })
        ));
    }

    #[test]
    fn error_code_table_covers_all_known_codes() {
        for kind in KnownErrorCode::ALL {
            let code = ErrorCode::new(kind.code());
            assert_eq!(code.known(), Some(kind));
            assert!(!kind.description().is_empty());
        }
        assert_eq!(
            ErrorCode::new(2).description(),
            Some("invalid login or password")
        );
        assert!(ErrorCode::new(2).known().unwrap().is_auth_error());
    }

    #[test]
    fn unknown_and_zero_codes_have_no_description() {
        assert_eq!(ErrorCode::new(0).description(), None);
        assert!(!ErrorCode::new(0).is_error());
        assert_eq!(ErrorCode::new(42).known(), None);
        assert!(ErrorCode::new(42).is_error());
    }
}
