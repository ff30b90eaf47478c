pub mod domain;
pub mod error;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    account::{
        Account, AccountProfile, DEFAULT_NICKNAME, MAX_NICKNAME_LENGTH, MAX_PHONE_LENGTH,
        MAX_USERNAME_LENGTH, NewAccount, ProfileUpdate,
    },
    course::{Course, CourseStatus, CourseUpdate, NewCourse, UNKNOWN_INSTRUCTOR},
    email::{Email, looks_like_email},
    file_asset::{
        FileAsset, FileCategory, FileFilter, FileQuery, MAX_UPLOAD_BYTES, NewFileAsset,
        UploadRequest, ValidatedUpload,
    },
    ids::{AccountId, CategoryId, CourseId, FileId},
    input_error::InputError,
    pagination::{Page, PageRequest},
    password::{Password, PasswordHash},
};

pub use error::{ErrorKind, ServiceError};

pub use ports::{
    cache::{CacheBackend, CacheError, SharedCache},
    repositories::{AccountStore, CourseStore, FileStore, StoreError},
    services::{
        CredentialCodec, HashingError, ObjectStorage, StorageError, StoredObject, TokenAuthority,
        TokenError,
    },
};

pub use strategies::auth_validator::AuthValidator;

pub type CoursePage = Page<Course>;
pub type FilePage = Page<FileAsset>;
