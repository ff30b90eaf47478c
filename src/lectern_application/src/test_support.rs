//! Fixtures shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use lectern_adapters::{HashmapAccountStore, HashmapCourseStore, HashmapFileStore, MemoryCache};
use lectern_core::{
    AccountId, CredentialCodec, HashingError, Password, PasswordHash, TokenAuthority, TokenError,
};
use secrecy::{ExposeSecret, Secret};

use crate::{AccountRepository, CacheAside, CachePolicy, CourseRepository, FileRepository};

/// Reversible stand-in for a real hasher.
#[derive(Clone, Default)]
pub struct PlainCodec;

#[async_trait]
impl CredentialCodec for PlainCodec {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        Ok(PasswordHash::new(Secret::new(format!(
            "plain:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(&self, candidate: &Secret<String>, digest: &PasswordHash) -> bool {
        digest.as_ref().expose_secret() == &format!("plain:{}", candidate.expose_secret())
    }
}

/// Tokens of the form `token-<id>`.
#[derive(Clone, Default)]
pub struct PlainTokens;

impl TokenAuthority for PlainTokens {
    fn issue(&self, account_id: AccountId) -> Result<String, TokenError> {
        Ok(format!("token-{account_id}"))
    }

    fn verify(&self, token: &str) -> Result<AccountId, TokenError> {
        token
            .strip_prefix("token-")
            .and_then(|id| id.parse::<i64>().ok())
            .map(AccountId::new)
            .ok_or(TokenError::Malformed)
    }
}

pub fn cache() -> CacheAside {
    CacheAside::new(Arc::new(MemoryCache::new()), CachePolicy::default())
}

pub fn accounts() -> AccountRepository<HashmapAccountStore> {
    AccountRepository::new(HashmapAccountStore::default(), cache())
}

pub fn courses() -> CourseRepository<HashmapCourseStore> {
    CourseRepository::new(HashmapCourseStore::default(), cache())
}

pub fn files(store: HashmapFileStore) -> FileRepository<HashmapFileStore> {
    FileRepository::new(store, cache())
}

pub fn secret(raw: &str) -> Secret<String> {
    Secret::new(raw.to_string())
}
