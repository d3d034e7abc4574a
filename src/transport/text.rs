use serde::Deserialize;
use serde::de::Error as DeError;

/// Text value returned by SMSC.RU as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`10.00` remains `"10.00"` instead of becoming `"10.0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportText(String);

impl TransportText {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected text field to be JSON string or number",
            )),
        }
    }
}

pub fn text_or_empty(value: Option<TransportText>) -> String {
    value.map(TransportText::into_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default)]
        value: Option<TransportText>,
    }

    fn decode(json: &str) -> Result<String, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|it| text_or_empty(it.value))
    }

    #[test]
    fn keeps_numbers_verbatim() {
        assert_eq!(decode(r#"{"value": 10.00}"#).unwrap(), "10.00");
        assert_eq!(decode(r#"{"value": -1}"#).unwrap(), "-1");
    }

    #[test]
    fn unescapes_strings() {
        assert_eq!(decode(r#"{"value": "a\"b"}"#).unwrap(), "a\"b");
    }

    #[test]
    fn null_and_missing_become_empty() {
        assert_eq!(decode(r#"{"value": null}"#).unwrap(), "");
        assert_eq!(decode("{}").unwrap(), "");
    }

    #[test]
    fn rejects_objects() {
        assert!(decode(r#"{"value": {}}"#).is_err());
    }
}
