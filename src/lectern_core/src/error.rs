use thiserror::Error;

use crate::{
    domain::input_error::InputError,
    ports::{
        repositories::StoreError,
        services::{HashingError, StorageError, TokenError},
    },
};

/// Failure surfaced by every service operation.
///
/// Cache failures never appear here: they are degraded to misses or logged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] InputError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Forbidden(String),
    #[error("token rejected: {0}")]
    Unauthorized(TokenError),
    #[error("dependency unavailable: {0}")]
    Unavailable(String),
    #[error("internal error: {0}")]
    Fatal(String),
}

/// Fieldless classification used to map errors at the gateway boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    InvalidCredentials,
    Forbidden,
    Unauthorized,
    Unavailable,
    Fatal,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Conflict(_) => ErrorKind::Conflict,
            ServiceError::InvalidCredentials => ErrorKind::InvalidCredentials,
            ServiceError::Forbidden(_) => ErrorKind::Forbidden,
            ServiceError::Unauthorized(_) => ErrorKind::Unauthorized,
            ServiceError::Unavailable(_) => ErrorKind::Unavailable,
            ServiceError::Fatal(_) => ErrorKind::Fatal,
        }
    }

    /// Maps a store failure for an entity the caller asked for by key.
    pub fn from_store(entity: &'static str, error: StoreError) -> Self {
        match error {
            StoreError::NotFound => ServiceError::NotFound(entity),
            other => other.into(),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => ServiceError::NotFound("record"),
            StoreError::Conflict(constraint) => {
                ServiceError::Conflict(format!("{constraint} already exists"))
            }
            StoreError::Rejected(reason) => ServiceError::Validation(InputError::Rejected(reason)),
            StoreError::Unavailable(reason) => ServiceError::Unavailable(reason),
            StoreError::Unexpected(reason) => ServiceError::Fatal(reason),
        }
    }
}

impl From<TokenError> for ServiceError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Signing(reason) => ServiceError::Fatal(reason),
            rejected => ServiceError::Unauthorized(rejected),
        }
    }
}

impl From<HashingError> for ServiceError {
    fn from(error: HashingError) -> Self {
        ServiceError::Fatal(error.to_string())
    }
}

impl From<StorageError> for ServiceError {
    fn from(error: StorageError) -> Self {
        ServiceError::Unavailable(error.to_string())
    }
}
