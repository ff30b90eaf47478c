use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    course::{Course, NewCourse},
    file_asset::{FileAsset, FileQuery, NewFileAsset},
    ids::{AccountId, CategoryId, CourseId, FileId},
    pagination::PageRequest,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    /// A unique constraint rejected the write. Carries the constrained column.
    #[error("unique constraint violated on {0}")]
    Conflict(String),
    /// The store refused a value as out of range for its column.
    #[error("value rejected by store: {0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected store error: {0}")]
    Unexpected(String),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound)
                | (Self::Conflict(_), Self::Conflict(_))
                | (Self::Rejected(_), Self::Rejected(_))
                | (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// System of record for accounts. Soft-deleted rows are invisible to every
/// lookup, but their email and username stay reserved: `exists_by_*` still
/// reports them.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Account, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Account, StoreError>;
    async fn find_by_username(&self, username: &str) -> Result<Account, StoreError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;
    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError>;
    /// Writes profile fields and the password hash, refreshing `updated_at`.
    async fn update(&self, account: &Account) -> Result<Account, StoreError>;
    async fn soft_delete(&self, id: AccountId) -> Result<(), StoreError>;
    /// Newest first.
    async fn list(&self, page: PageRequest) -> Result<(Vec<Account>, u64), StoreError>;
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn insert(&self, course: NewCourse) -> Result<Course, StoreError>;
    async fn find_by_id(&self, id: CourseId) -> Result<Course, StoreError>;
    async fn find_by_title(&self, title: &str) -> Result<Course, StoreError>;
    async fn exists_by_title(&self, title: &str) -> Result<bool, StoreError>;
    async fn update(&self, course: &Course) -> Result<Course, StoreError>;
    async fn delete(&self, id: CourseId) -> Result<(), StoreError>;
    /// Published courses only, newest first. `None` means every category.
    async fn list_published(
        &self,
        category: Option<CategoryId>,
        page: PageRequest,
    ) -> Result<(Vec<Course>, u64), StoreError>;
    /// Every course of the instructor regardless of status, newest first.
    async fn list_by_instructor(&self, instructor: AccountId) -> Result<Vec<Course>, StoreError>;
}

#[async_trait]
pub trait FileStore: Send + Sync {
    async fn insert(&self, file: NewFileAsset) -> Result<FileAsset, StoreError>;
    async fn find_by_id(&self, id: FileId) -> Result<FileAsset, StoreError>;
    async fn delete(&self, id: FileId) -> Result<(), StoreError>;
    /// Newest upload first.
    async fn list(&self, query: &FileQuery) -> Result<(Vec<FileAsset>, u64), StoreError>;
}
