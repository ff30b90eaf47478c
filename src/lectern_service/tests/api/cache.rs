use std::{sync::Arc, time::Duration};

use lectern_application::keys;
use lectern_core::{
    AccountStore, CacheBackend, CacheError, CategoryId, Course, CourseId, ProfileUpdate,
};
use secrecy::Secret;

use crate::helpers::{PASSWORD, TestApp, draft, new_account};

/// A cache whose every call fails, as during a Redis outage.
struct UnreachableCache;

#[async_trait::async_trait]
impl CacheBackend for UnreachableCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn delete_pattern(&self, _pattern: &str) -> Result<u64, CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_direct_store_writes_stay_hidden_until_ttl_elapses() {
    let app = TestApp::new();
    let account = app
        .account_store
        .insert(new_account("jane@example.com"))
        .await
        .unwrap();
    let accounts = app.platform.accounts();

    assert_eq!(accounts.get_by_id(account.id).await.unwrap().nickname, "Original");

    let mut changed = account.clone();
    changed
        .apply(ProfileUpdate {
            nickname: Some("Changed".to_string()),
            ..ProfileUpdate::default()
        })
        .unwrap();
    app.account_store.update(&changed).await.unwrap();

    tokio::time::advance(Duration::from_secs(29 * 60)).await;
    assert_eq!(accounts.get_by_id(account.id).await.unwrap().nickname, "Original");

    tokio::time::advance(Duration::from_secs(2 * 60)).await;
    assert_eq!(accounts.get_by_id(account.id).await.unwrap().nickname, "Changed");
}

#[tokio::test]
async fn test_entries_are_written_under_the_keys_readers_use() {
    let app = TestApp::new();
    let instructor = app.register("teacher@example.com").await;
    let course = app.create_course("Rust 101", instructor.id).await;

    let raw = app
        .cache
        .get(&keys::course_by_id(course.id))
        .await
        .unwrap()
        .expect("create warms the id key");
    let cached: Course = serde_json::from_slice(&raw).unwrap();
    assert_eq!(cached, course);

    app.platform.courses().list(1, 10, CategoryId::new(0)).await.unwrap();
    assert!(
        app.cache
            .get("courses:list:category:0:page:1:size:10")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_invalidating_cold_keys_is_harmless() {
    let app = TestApp::new();
    let profile = app.register("jane@example.com").await;

    // start from cold keys
    for key in [
        keys::account_by_id(profile.id),
        keys::account_by_email("jane@example.com"),
        keys::account_by_username("jane@example.com"),
    ] {
        app.cache.delete(&key).await.unwrap();
    }

    let updated = app
        .platform
        .accounts()
        .update_profile(
            profile.id,
            ProfileUpdate {
                phone: Some("555-0100".to_string()),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.phone, "555-0100");

    assert_eq!(
        app.platform
            .courses()
            .delete(CourseId::new(404))
            .await
            .unwrap_err()
            .kind(),
        lectern_core::ErrorKind::NotFound
    );
}

#[tokio::test]
async fn test_cache_outage_degrades_to_store_only() {
    let app = TestApp::with_cache(Arc::new(UnreachableCache));
    let accounts = app.platform.accounts();

    let profile = app.register("jane@example.com").await;
    let outcome = accounts
        .login("jane@example.com", Secret::new(PASSWORD.to_string()))
        .await
        .unwrap();
    assert_eq!(outcome.account.id, profile.id);

    let course = app
        .platform
        .courses()
        .create(draft("Rust 101", profile.id))
        .await
        .unwrap();
    app.platform.courses().publish(course.id).await.unwrap();

    let listing = app
        .platform
        .courses()
        .list(1, 10, CategoryId::new(0))
        .await
        .unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(
        app.platform.courses().get_by_id(course.id).await.unwrap().title,
        "Rust 101"
    );
}
