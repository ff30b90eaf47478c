use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    email::MAX_EMAIL_LENGTH, ids::AccountId, input_error::InputError, password::PasswordHash,
};

/// Nickname assigned when none is supplied, or when a profile update clears it.
pub const DEFAULT_NICKNAME: &str = "New User";

pub const MAX_USERNAME_LENGTH: usize = 100;
pub const MAX_NICKNAME_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 20;

/// An account row as held by the relational store.
///
/// `Account` is serialized only into the cache. Anything leaving the service
/// boundary goes through [`AccountProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub username: String,
    pub password_hash: PasswordHash,
    pub nickname: String,
    pub avatar_url: String,
    pub phone: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            nickname: self.nickname.clone(),
            avatar_url: self.avatar_url.clone(),
            phone: self.phone.clone(),
            bio: self.bio.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Overwrites every field present in `update`. Returns whether anything
    /// changed. Nothing is written when a field fails validation.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<bool, InputError> {
        update.validate()?;
        let mut changed = false;

        if let Some(nickname) = update.nickname {
            let nickname = if nickname.is_empty() {
                DEFAULT_NICKNAME.to_string()
            } else {
                nickname
            };
            changed |= replace_if_different(&mut self.nickname, nickname);
        }
        if let Some(avatar_url) = update.avatar_url {
            changed |= replace_if_different(&mut self.avatar_url, avatar_url);
        }
        if let Some(phone) = update.phone {
            changed |= replace_if_different(&mut self.phone, phone);
        }
        if let Some(bio) = update.bio {
            changed |= replace_if_different(&mut self.bio, bio);
        }

        Ok(changed)
    }
}

fn ensure_max_length(field: &'static str, value: &str, max: usize) -> Result<(), InputError> {
    if value.chars().count() > max {
        return Err(InputError::TooLong { field, max });
    }
    Ok(())
}

fn replace_if_different(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Outward view of an account. Carries no credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: AccountId,
    pub email: String,
    pub username: String,
    pub nickname: String,
    pub avatar_url: String,
    pub phone: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new account, already normalized.
#[derive(Debug, Clone)]
pub struct NewAccount {
    email: String,
    username: String,
    password_hash: PasswordHash,
    nickname: String,
}

impl NewAccount {
    /// Seeds the empty one of email/username from the other and fills in the
    /// default nickname.
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        password_hash: PasswordHash,
        nickname: Option<String>,
    ) -> Result<Self, InputError> {
        let username = username.filter(|value| !value.is_empty());
        let email = email.filter(|value| !value.is_empty());

        let (email, username) = match (email, username) {
            (Some(email), Some(username)) => (email, username),
            (Some(email), None) => (email.clone(), email),
            (None, Some(username)) => (username.clone(), username),
            (None, None) => return Err(InputError::Empty("email or username")),
        };

        let nickname = nickname
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_NICKNAME.to_string());

        ensure_max_length("email", &email, MAX_EMAIL_LENGTH)?;
        ensure_max_length("username", &username, MAX_USERNAME_LENGTH)?;
        ensure_max_length("nickname", &nickname, MAX_NICKNAME_LENGTH)?;

        Ok(Self {
            email,
            username,
            password_hash,
            nickname,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Materializes the row the store would hold after inserting this payload.
    pub fn into_account(self, id: AccountId, now: DateTime<Utc>) -> Account {
        Account {
            id,
            email: self.email,
            username: self.username,
            password_hash: self.password_hash,
            nickname: self.nickname,
            avatar_url: String::new(),
            phone: String::new(),
            bio: String::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Partial profile update. `None` leaves a field untouched, `Some` overwrites it,
/// including with the empty string. An empty nickname resets it to
/// [`DEFAULT_NICKNAME`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.nickname.is_none()
            && self.avatar_url.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if let Some(nickname) = &self.nickname {
            ensure_max_length("nickname", nickname, MAX_NICKNAME_LENGTH)?;
        }
        if let Some(phone) = &self.phone {
            ensure_max_length("phone", phone, MAX_PHONE_LENGTH)?;
        }
        Ok(())
    }
}
