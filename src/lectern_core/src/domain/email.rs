use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::input_error::InputError;

const MIN_EMAIL_LENGTH: usize = 5;
pub const MAX_EMAIL_LENGTH: usize = 100;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("static regex is valid"));

/// A validated email address.
///
/// Accepted addresses are between 5 and 100 characters, contain exactly one
/// `@` separating non-empty parts without whitespace, and contain a `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, InputError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InputError::Empty("email"));
        }
        if raw.chars().count() > MAX_EMAIL_LENGTH {
            return Err(InputError::TooLong {
                field: "email",
                max: MAX_EMAIL_LENGTH,
            });
        }
        if raw.chars().count() < MIN_EMAIL_LENGTH
            || !raw.contains('.')
            || !EMAIL_SHAPE.is_match(&raw)
        {
            return Err(InputError::MalformedEmail);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Login-time heuristic: does this identifier look like an email address?
pub fn looks_like_email(identifier: &str) -> bool {
    identifier.contains('@') && identifier.contains('.')
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
