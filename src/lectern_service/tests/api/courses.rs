use lectern_core::{
    AccountId, CategoryId, CourseStatus, CourseUpdate, ErrorKind, ProfileUpdate,
    UNKNOWN_INSTRUCTOR,
};

use crate::helpers::{TestApp, draft};

#[tokio::test]
async fn test_duplicate_title_is_a_conflict() {
    let app = TestApp::new();
    let instructor = app.register("teacher@example.com").await;
    app.create_course("Rust 101", instructor.id).await;

    let error = app
        .platform
        .courses()
        .create(draft("  Rust 101 ", instructor.id))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_published_course_appears_in_the_first_page() {
    let app = TestApp::new();
    let instructor = app.register("teacher@example.com").await;
    let courses = app.platform.courses();
    let course = app.create_course("Rust 101", instructor.id).await;

    // cache the empty listing first
    let before = courses.list(1, 10, CategoryId::new(0)).await.unwrap();
    assert_eq!(before.total, 0);

    let published = courses.publish(course.id).await.unwrap();
    assert_eq!(published.status, CourseStatus::Published);

    let after = courses.list(1, 10, CategoryId::new(0)).await.unwrap();
    assert_eq!(after.total, 1);
    assert_eq!(after.items[0].id, course.id);

    let in_category = courses.list(0, 0, CategoryId::new(1)).await.unwrap();
    assert_eq!(in_category.items.len(), 1);
    assert_eq!(in_category.page_size, 10);

    let elsewhere = courses.list(1, 10, CategoryId::new(2)).await.unwrap();
    assert!(elsewhere.items.is_empty());
}

#[tokio::test]
async fn test_publishing_twice_is_rejected() {
    let app = TestApp::new();
    let instructor = app.register("teacher@example.com").await;
    let course = app.create_course("Rust 101", instructor.id).await;

    app.platform.courses().publish(course.id).await.unwrap();
    let error = app.platform.courses().publish(course.id).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_teacher_name_is_snapshotted_at_creation() {
    let app = TestApp::new();
    let instructor = app.register("teacher@example.com").await;
    app.platform
        .accounts()
        .update_profile(
            instructor.id,
            ProfileUpdate {
                nickname: Some("Prof. Ada".to_string()),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    let course = app.create_course("Rust 101", instructor.id).await;
    assert_eq!(course.teacher_name, "Prof. Ada");

    let orphan = app.create_course("Lost Course", AccountId::new(999)).await;
    assert_eq!(orphan.teacher_name, UNKNOWN_INSTRUCTOR);
}

#[tokio::test]
async fn test_update_refreshes_cached_course_and_title_lookup() {
    let app = TestApp::new();
    let instructor = app.register("teacher@example.com").await;
    let courses = app.platform.courses();
    let course = app.create_course("Rust 101", instructor.id).await;
    app.create_course("Go 101", instructor.id).await;

    courses.get_by_id(course.id).await.unwrap();

    let error = courses
        .update(
            course.id,
            CourseUpdate {
                title: Some("Go 101".to_string()),
                ..CourseUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Conflict);

    courses
        .update(
            course.id,
            CourseUpdate {
                title: Some("Rust 201".to_string()),
                price: Some(0.0),
                ..CourseUpdate::default()
            },
        )
        .await
        .unwrap();

    let fetched = courses.get_by_id(course.id).await.unwrap();
    assert_eq!(fetched.title, "Rust 201");
    assert_eq!(fetched.price, 0.0);

    // the old title is free again
    app.create_course("Rust 101", instructor.id).await;
}

#[tokio::test]
async fn test_instructor_listing_and_delete() {
    let app = TestApp::new();
    let instructor = app.register("teacher@example.com").await;
    let courses = app.platform.courses();
    let first = app.create_course("Rust 101", instructor.id).await;
    app.create_course("Rust 201", instructor.id).await;

    assert_eq!(courses.list_by_instructor(instructor.id).await.unwrap().len(), 2);

    courses.delete(first.id).await.unwrap();

    assert_eq!(courses.list_by_instructor(instructor.id).await.unwrap().len(), 1);
    assert_eq!(
        courses.get_by_id(first.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        courses.delete(first.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        courses
            .list_by_instructor(AccountId::new(0))
            .await
            .unwrap_err()
            .kind(),
        ErrorKind::Validation
    );
}
