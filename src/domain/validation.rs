use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    InvalidPhoneNumber {
        input: String,
    },
    MissingCredentials,
    MissingRecipients,
    MissingMessage,
    MessageTooLong {
        max: usize,
        actual: usize,
    },
    InvalidTime {
        input: String,
    },
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        actual: i32,
    },
    PeriodOutOfRange {
        min: f64,
        max: f64,
        actual: f64,
    },
    NegativeMaxSms {
        actual: i32,
    },
    InvalidLifetimeFormat {
        input: String,
    },
    InvalidLifetime {
        input: String,
    },
    LifetimeOutOfRange {
        hour: u32,
        minute: u32,
    },
    FileUrlTooShort {
        min: usize,
        actual: usize,
    },
    InvalidVoice {
        input: String,
    },
    InvalidVoiceParams {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::MissingCredentials => write!(f, "login and psw are required"),
            Self::MissingRecipients => write!(f, "either phones or list is required"),
            Self::MissingMessage => write!(f, "either mes or list is required"),
            Self::MessageTooLong { max, actual } => {
                write!(f, "message is too long: {actual} characters (max {max})")
            }
            Self::InvalidTime { input } => write!(
                f,
                "invalid send time {input:?}: expected DDMMYYhhmm, DD.MM.YY hh:mm, h1-h2, 0ts or +m"
            ),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::PeriodOutOfRange { min, max, actual } => write!(
                f,
                "period out of range: {actual} hours (expected {min}..={max})"
            ),
            Self::NegativeMaxSms { actual } => {
                write!(f, "maxsms must not be negative: {actual}")
            }
            Self::InvalidLifetimeFormat { input } => {
                write!(f, "invalid valid {input:?}: expected hh:mm")
            }
            Self::InvalidLifetime { input } => {
                write!(f, "valid {input:?} is not a time of day")
            }
            Self::LifetimeOutOfRange { hour, minute } => write!(
                f,
                "valid out of range: {hour}:{minute:02} (expected 1..=24 hours, 0..=59 minutes)"
            ),
            Self::FileUrlTooShort { min, actual } => write!(
                f,
                "fileurl is too short: {actual} characters (min {min})"
            ),
            Self::InvalidVoice { input } => write!(
                f,
                "invalid voice {input:?}: expected one of m, m2, m3, m4, w, w2, w3, w4"
            ),
            Self::InvalidVoiceParams { input } => write!(
                f,
                "invalid param {input:?}: expected three comma-separated numbers"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "login" };
        assert_eq!(err.to_string(), "login must not be empty");

        let err = ValidationError::MessageTooLong {
            max: 1000,
            actual: 1001,
        };
        assert_eq!(
            err.to_string(),
            "message is too long: 1001 characters (max 1000)"
        );

        let err = ValidationError::OutOfRange {
            field: "cost",
            min: 0,
            max: 3,
            actual: 4,
        };
        assert_eq!(err.to_string(), "cost out of range: 4 (expected 0..=3)");

        let err = ValidationError::LifetimeOutOfRange {
            hour: 25,
            minute: 0,
        };
        assert_eq!(
            err.to_string(),
            "valid out of range: 25:00 (expected 1..=24 hours, 0..=59 minutes)"
        );

        let err = ValidationError::InvalidVoice {
            input: "x".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid voice \"x\": expected one of m, m2, m3, m4, w, w2, w3, w4"
        );
    }

    #[test]
    fn lifetime_format_and_range_messages_differ() {
        let format = ValidationError::InvalidLifetimeFormat {
            input: "99".to_owned(),
        };
        let parse = ValidationError::InvalidLifetime {
            input: "99".to_owned(),
        };
        let range = ValidationError::LifetimeOutOfRange {
            hour: 99,
            minute: 0,
        };
        assert_ne!(format.to_string(), parse.to_string());
        assert_ne!(parse.to_string(), range.to_string());
    }

    #[test]
    fn out_of_range_messages_name_the_field() {
        let flash = ValidationError::OutOfRange {
            field: "flash",
            min: 0,
            max: 1,
            actual: 2,
        };
        let call = ValidationError::OutOfRange {
            field: "call",
            min: 0,
            max: 1,
            actual: 2,
        };
        assert!(flash.to_string().starts_with("flash "));
        assert_ne!(flash.to_string(), call.to_string());
    }
}
