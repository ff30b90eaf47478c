use thiserror::Error;

/// Caller-side input problems. Never retried; always surfaced as a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("email is malformed")]
    MalformedEmail,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("password must not exceed {0} characters")]
    PasswordTooLong(usize),
    #[error("{0} is required")]
    MissingId(&'static str),
    #[error("price must be a finite, non-negative amount")]
    InvalidPrice,
    #[error("course is already published")]
    AlreadyPublished,
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("file type {category} does not accept {extension:?} files")]
    ExtensionNotAllowed { category: String, extension: String },
    #[error("payload of {size} bytes exceeds the {max} byte limit")]
    PayloadTooLarge { size: u64, max: u64 },
    #[error("course id is required unless uploading an image")]
    CourseRequired,
    #[error("{0}")]
    Rejected(String),
}
