use std::sync::Arc;

use lectern_adapters::{
    HashmapAccountStore, HashmapCourseStore, HashmapFileStore, JwtConfig, JwtTokenAuthority,
    MemoryCache, MemoryObjectStorage,
};
use lectern_application::{CachePolicy, CourseDraft, Registration};
use lectern_core::{
    AccountId, AccountProfile, CategoryId, Course, NewAccount, PasswordHash, SharedCache,
};
use lectern_service::Platform;
use secrecy::Secret;

pub type TestPlatform =
    Platform<HashmapAccountStore, HashmapCourseStore, HashmapFileStore, MemoryObjectStorage>;

pub const PASSWORD: &str = "password123";
pub const TOKEN_SECRET: &str = "test-secret";
const TOKEN_TTL_SECONDS: i64 = 600;

/// A platform over in-memory adapters, with handles to each of them so tests
/// can observe or bypass the cache.
pub struct TestApp {
    pub platform: TestPlatform,
    pub account_store: HashmapAccountStore,
    pub course_store: HashmapCourseStore,
    pub file_store: HashmapFileStore,
    pub storage: MemoryObjectStorage,
    pub cache: MemoryCache,
}

impl TestApp {
    pub fn new() -> Self {
        let cache = MemoryCache::new();
        Self::build(Arc::new(cache.clone()), cache)
    }

    /// Uses `shared` as the platform cache; `cache` stays an unused handle.
    pub fn with_cache(shared: SharedCache) -> Self {
        Self::build(shared, MemoryCache::new())
    }

    fn build(shared: SharedCache, cache: MemoryCache) -> Self {
        let account_store = HashmapAccountStore::default();
        let course_store = HashmapCourseStore::default();
        let file_store = HashmapFileStore::default();
        let storage = MemoryObjectStorage::default();

        let tokens = JwtTokenAuthority::new(JwtConfig {
            secret: Secret::new(TOKEN_SECRET.to_string()),
            time_to_live_seconds: TOKEN_TTL_SECONDS,
        })
        .unwrap();

        let platform = Platform::new(
            account_store.clone(),
            course_store.clone(),
            file_store.clone(),
            storage.clone(),
            shared,
            CachePolicy::default(),
            tokens,
        );

        Self {
            platform,
            account_store,
            course_store,
            file_store,
            storage,
            cache,
        }
    }

    pub async fn register(&self, email: &str) -> AccountProfile {
        self.platform
            .accounts()
            .register(registration(email))
            .await
            .unwrap()
    }

    pub async fn create_course(&self, title: &str, instructor: AccountId) -> Course {
        self.platform
            .courses()
            .create(draft(title, instructor))
            .await
            .unwrap()
    }
}

pub fn registration(email: &str) -> Registration {
    Registration {
        username: String::new(),
        email: email.to_string(),
        password: Secret::new(PASSWORD.to_string()),
        nickname: String::new(),
    }
}

pub fn draft(title: &str, instructor: AccountId) -> CourseDraft {
    CourseDraft {
        title: title.to_string(),
        description: format!("All about {title}"),
        instructor_id: instructor,
        category_id: CategoryId::new(1),
        price: 19.99,
        cover_image: String::new(),
    }
}

/// An account inserted straight into the store, skipping password hashing.
pub fn new_account(email: &str) -> NewAccount {
    NewAccount::new(
        None,
        Some(email.to_string()),
        PasswordHash::new(Secret::new("$argon2id$unused".to_string())),
        Some("Original".to_string()),
    )
    .unwrap()
}
