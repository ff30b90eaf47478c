use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    ids::AccountId,
    password::{Password, PasswordHash},
};

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("failed to hash password: {0}")]
    Hash(String),
    #[error("hashing task failed: {0}")]
    Task(String),
}

/// One-way password hashing.
#[async_trait]
pub trait CredentialCodec: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError>;
    /// `false` on mismatch and on digests that cannot be parsed.
    async fn verify(&self, candidate: &Secret<String>, digest: &PasswordHash) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
    #[error("token is missing required claims")]
    ClaimsMissing,
    #[error("authorization header is missing")]
    MissingToken,
    #[error("authorization header is not a bearer token")]
    InvalidHeader,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies signed bearer tokens bound to an account.
pub trait TokenAuthority: Send + Sync {
    fn issue(&self, account_id: AccountId) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<AccountId, TokenError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write object {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove object {path}: {reason}")]
    Remove { path: String, reason: String },
}

/// Where an object landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub path: String,
    pub url: String,
}

/// Blob storage for uploaded files.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Writes `bytes` under the relative `key`, e.g. `course_3/<name>.pdf`.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<StoredObject, StorageError>;
    /// Removes an object by the `path` returned from [`ObjectStorage::put`].
    async fn remove(&self, path: &str) -> Result<(), StorageError>;
}
