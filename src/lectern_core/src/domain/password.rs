use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::input_error::InputError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 30;

/// A plaintext password that passed the length policy for the operation it
/// was parsed for. Never logged, never serialized.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Registration policy: between 8 and 30 characters.
    pub fn for_registration(raw: Secret<String>) -> Result<Self, InputError> {
        let length = raw.expose_secret().chars().count();
        if length == 0 {
            return Err(InputError::Empty("password"));
        }
        if length < MIN_PASSWORD_LENGTH {
            return Err(InputError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(InputError::PasswordTooLong(MAX_PASSWORD_LENGTH));
        }
        Ok(Self(raw))
    }

    /// Password change policy: at least 8 characters.
    pub fn for_change(raw: Secret<String>) -> Result<Self, InputError> {
        let length = raw.expose_secret().chars().count();
        if length == 0 {
            return Err(InputError::Empty("new password"));
        }
        if length < MIN_PASSWORD_LENGTH {
            return Err(InputError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        Ok(Self(raw))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// A one-way digest produced by a credential codec (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(digest: Secret<String>) -> Self {
        Self(digest)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for PasswordHash {}

// Only the internal cache encoding goes through these impls; outward payloads
// use `AccountProfile`, which has no hash field.
impl Serialize for PasswordHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for PasswordHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|digest| Self(Secret::new(digest)))
    }
}
