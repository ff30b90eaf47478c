use fake::{Fake, faker::internet::en::SafeEmail};
use jsonwebtoken::{EncodingKey, Header};
use lectern_core::{ErrorKind, ProfileUpdate, ServiceError, TokenError};
use secrecy::Secret;

use crate::helpers::{PASSWORD, TOKEN_SECRET, TestApp, registration};

fn bearer(token: &str) -> http::request::Parts {
    http::Request::builder()
        .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
        .body(())
        .unwrap()
        .into_parts()
        .0
}

#[tokio::test]
async fn test_register_then_login_issues_token_for_new_account() {
    let app = TestApp::new();
    let email: String = SafeEmail().fake();

    let profile = app.register(&email).await;
    let outcome = app
        .platform
        .accounts()
        .login(&email, Secret::new(PASSWORD.to_string()))
        .await
        .unwrap();

    assert_eq!(outcome.account.id, profile.id);
    assert_eq!(profile.username, email);
    assert_eq!(profile.nickname, "New User");
    assert_eq!(
        app.platform.accounts().verify_token(&outcome.token).unwrap(),
        profile.id
    );
    assert_eq!(
        app.platform.authenticate(&bearer(&outcome.token)).await.unwrap(),
        profile.id
    );
}

#[tokio::test]
async fn test_login_accepts_username() {
    let app = TestApp::new();
    let mut form = registration("jane@example.com");
    form.username = "jane".to_string();
    let profile = app.platform.accounts().register(form).await.unwrap();

    let outcome = app
        .platform
        .accounts()
        .login("jane", Secret::new(PASSWORD.to_string()))
        .await
        .unwrap();

    assert_eq!(outcome.account.id, profile.id);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_identifier_look_the_same() {
    let app = TestApp::new();
    app.register("jane@example.com").await;

    let wrong_password = app
        .platform
        .accounts()
        .login("jane@example.com", Secret::new("not-the-password".to_string()))
        .await
        .unwrap_err();
    let unknown = app
        .platform
        .accounts()
        .login("nobody@example.com", Secret::new(PASSWORD.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, ServiceError::InvalidCredentials));
    assert!(matches!(unknown, ServiceError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown.to_string());
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let app = TestApp::new();
    app.register("jane@example.com").await;

    let error = app
        .platform
        .accounts()
        .register(registration("jane@example.com"))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_invalid_registrations_are_validation_errors() {
    let app = TestApp::new();

    let mut short = registration("jane@example.com");
    short.password = Secret::new("short".to_string());
    let malformed = registration("not-an-email");

    for form in [short, malformed] {
        let error = app.platform.accounts().register(form).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
    }
    assert!(app.cache.is_empty());
}

#[tokio::test]
async fn test_change_password_then_login_with_new_one() {
    let app = TestApp::new();
    let profile = app.register("jane@example.com").await;
    let accounts = app.platform.accounts();

    let error = accounts
        .change_password(
            profile.id,
            Secret::new("wrong-old-password".to_string()),
            Secret::new("brand-new-password".to_string()),
        )
        .await
        .unwrap_err();
    assert!(matches!(error, ServiceError::InvalidCredentials));

    accounts
        .change_password(
            profile.id,
            Secret::new(PASSWORD.to_string()),
            Secret::new("brand-new-password".to_string()),
        )
        .await
        .unwrap();

    assert!(
        accounts
            .login("jane@example.com", Secret::new(PASSWORD.to_string()))
            .await
            .is_err()
    );
    assert!(
        accounts
            .login(
                "jane@example.com",
                Secret::new("brand-new-password".to_string())
            )
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_profile_update_is_visible_through_every_lookup() {
    let app = TestApp::new();
    let profile = app.register("jane@example.com").await;
    let accounts = app.platform.accounts();

    // warm all three keys
    accounts.get_by_id(profile.id).await.unwrap();
    accounts.get_by_email("jane@example.com").await.unwrap();
    accounts.get_by_username("jane@example.com").await.unwrap();

    accounts
        .update_profile(
            profile.id,
            ProfileUpdate {
                nickname: Some("Jane".to_string()),
                bio: Some("Teaches X".to_string()),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    for fetched in [
        accounts.get_by_id(profile.id).await.unwrap(),
        accounts.get_by_email("jane@example.com").await.unwrap(),
        accounts.get_by_username("jane@example.com").await.unwrap(),
    ] {
        assert_eq!(fetched.nickname, "Jane");
        assert_eq!(fetched.bio, "Teaches X");
    }
}

#[tokio::test]
async fn test_basic_profile_update_ignores_empty_fields() {
    let app = TestApp::new();
    let profile = app.register("jane@example.com").await;

    let updated = app
        .platform
        .accounts()
        .update_basic_profile(profile.id, String::new(), "me.png".to_string())
        .await
        .unwrap();

    assert_eq!(updated.nickname, "New User");
    assert_eq!(updated.avatar_url, "me.png");
}

#[tokio::test]
async fn test_token_is_rejected_once_expired() {
    let app = TestApp::new();
    let profile = app.register("jane@example.com").await;
    let outcome = app
        .platform
        .accounts()
        .login("jane@example.com", Secret::new(PASSWORD.to_string()))
        .await
        .unwrap();
    assert_eq!(
        app.platform.accounts().verify_token(&outcome.token).unwrap(),
        profile.id
    );

    let now = chrono::Utc::now().timestamp();
    let expired = jsonwebtoken::encode(
        &Header::default(),
        &serde_json::json!({
            "account_id": profile.id.get(),
            "iat": now - 120,
            "exp": now - 60,
        }),
        &EncodingKey::from_secret(TOKEN_SECRET.as_bytes()),
    )
    .unwrap();

    let error = app.platform.accounts().verify_token(&expired).unwrap_err();
    assert!(matches!(error, ServiceError::Unauthorized(TokenError::Expired)));
}

#[tokio::test]
async fn test_optional_authentication_tolerates_bad_headers() {
    let app = TestApp::new();
    let anonymous = http::Request::builder()
        .body(())
        .unwrap()
        .into_parts()
        .0;

    assert_eq!(app.platform.identify(&anonymous).await, None);
    assert_eq!(app.platform.identify(&bearer("garbage")).await, None);
    assert!(matches!(
        app.platform.authenticate(&anonymous).await,
        Err(ServiceError::Unauthorized(TokenError::MissingToken))
    ));
}
