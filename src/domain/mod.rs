//! Domain layer: the request record, its validation rules, and response types (no I/O).

mod request;
mod response;
mod rules;
mod validation;
mod value;

pub use request::Request;
pub use response::{RecipientResult, SendResponse};
pub use rules::{FILE_URL_MIN_CHARS, MESSAGE_MAX_CHARS, VOICES};
pub use validation::ValidationError;
pub use value::{ErrorCode, KnownErrorCode, Login, Password, PhoneNumber, SenderId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejects_empty() {
        assert!(matches!(
            Login::new("   "),
            Err(ValidationError::Empty {
                field: Login::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), " 79251234567 ").unwrap();
        assert_eq!(pn.raw(), "79251234567");
        assert_eq!(pn.e164(), "+79251234567");
    }

    #[test]
    fn request_built_from_parsed_numbers_validates_once_credentials_are_set() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), "79251234567").unwrap();
        let mut request = Request::to_numbers(&[pn], "hello");
        assert_eq!(request.validate(), Err(ValidationError::MissingCredentials));

        request.login = "user".to_owned();
        request.password = "pass".to_owned();
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn error_code_known_mapping() {
        let code = ErrorCode::new(3);
        assert_eq!(code.known(), Some(KnownErrorCode::InsufficientFunds));
        assert_eq!(code.description(), Some("insufficient funds on the account"));

        let unknown = ErrorCode::new(999_999);
        assert_eq!(unknown.known(), None);
    }

    #[test]
    fn response_helpers_report_errors() {
        let ok = SendResponse {
            id: 1,
            cnt: 1,
            ..Default::default()
        };
        assert!(!ok.has_error());
        assert!(ok.first_recipient_error().is_none());

        let failed = SendResponse {
            error_code: ErrorCode::new(7),
            phones: vec![
                RecipientResult {
                    phone: "79251234567".to_owned(),
                    ..Default::default()
                },
                RecipientResult {
                    phone: "70000000000".to_owned(),
                    error: "invalid phone number".to_owned(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert!(failed.has_error());
        assert_eq!(
            failed.first_recipient_error().map(|it| it.phone.as_str()),
            Some("70000000000")
        );
    }
}
