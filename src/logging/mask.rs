//! Sensitive-value masking
//!
//! Field names matching the sensitive-key pattern are replaced with
//! [`REDACTION_MARKER`] before they reach any log sink or serialized dump.
//! Matching is by field NAME, not value: a field called `password` is
//! masked no matter what it holds.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::SecretString;
use serde::Serializer;

/// Fixed marker substituted for sensitive values
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Field names that must never appear in clear text
static SENSITIVE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(password|passwd|pwd|secret|token|api[_-]?key|apikey|authorization|credential|private[_-]?key)",
    )
    .expect("valid regex")
});

/// Whether a field name refers to a sensitive value
pub fn is_sensitive(key: &str) -> bool {
    SENSITIVE_KEY.is_match(key)
}

/// Serialize a secret as the redaction marker (for `serialize_with`)
pub fn redact_secret<S>(_value: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(REDACTION_MARKER)
}

/// Serialize an optional secret as the redaction marker (for `serialize_with`)
pub fn redact_secret_opt<S>(
    value: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(_) => serializer.serialize_str(REDACTION_MARKER),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_sensitive_names_match() {
        for key in [
            "password",
            "PASSWORD",
            "db_password",
            "secret_key",
            "token",
            "access_token",
            "api_key",
            "api-key",
            "apiKey",
            "authorization",
            "credential",
            "private_key",
        ] {
            assert!(is_sensitive(key), "{key} should be sensitive");
        }
    }

    #[test]
    fn test_ordinary_names_do_not_match() {
        for key in ["username", "host", "port", "email", "pool_size", "level"] {
            assert!(!is_sensitive(key), "{key} should not be sensitive");
        }
    }

    #[test]
    fn test_redact_secret_serializes_marker() {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "redact_secret")]
            s: SecretString,
        }

        let wrapper = Wrapper {
            s: SecretString::from("hunter2".to_string()),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"s":"[REDACTED]"}"#);
    }

    #[test]
    fn test_redact_secret_opt_handles_both_arms() {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "redact_secret_opt")]
            s: Option<SecretString>,
        }

        let some = Wrapper {
            s: Some(SecretString::from("hunter2".to_string())),
        };
        assert_eq!(
            serde_json::to_string(&some).unwrap(),
            r#"{"s":"[REDACTED]"}"#
        );

        let none = Wrapper { s: None };
        assert_eq!(serde_json::to_string(&none).unwrap(), r#"{"s":null}"#);
    }
}
