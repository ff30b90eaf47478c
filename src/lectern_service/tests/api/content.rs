use lectern_core::{
    AccountId, CourseId, ErrorKind, FileCategory, FileFilter, UploadRequest,
};

use crate::helpers::TestApp;

fn upload(bytes: Vec<u8>, file_name: &str, file_type: &str, uploader: AccountId) -> UploadRequest {
    UploadRequest {
        bytes,
        file_name: file_name.to_string(),
        file_type: file_type.to_string(),
        course_id: CourseId::new(3),
        uploader_id: uploader,
    }
}

#[tokio::test]
async fn test_oversized_upload_is_rejected_before_any_side_effect() {
    let app = TestApp::new();
    let request = upload(vec![0; 60 * 1024 * 1024], "lecture.mp4", "video", AccountId::new(1));

    let error = app.platform.content().upload(request).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(app.storage.is_empty().await);
    assert!(app.file_store.is_empty().await);
    assert!(app.cache.is_empty());
}

#[tokio::test]
async fn test_upload_then_list_by_course_and_type() {
    let app = TestApp::new();
    let content = app.platform.content();
    let uploader = AccountId::new(1);

    let slides = content
        .upload(upload(b"%PDF".to_vec(), "Slides.PDF", "document", uploader))
        .await
        .unwrap();
    content
        .upload(upload(vec![1; 32], "intro.mp4", "video", uploader))
        .await
        .unwrap();

    assert!(slides.file_path.contains("course_3/"));
    assert!(slides.file_path.ends_with(".pdf"));
    assert_eq!(app.storage.object(&slides.file_path).await, Some(b"%PDF".to_vec()));

    let documents = content
        .list(
            FileFilter {
                course_id: Some(CourseId::new(3)),
                file_type: Some(FileCategory::Document),
                uploader_id: None,
            },
            1,
            0,
        )
        .await
        .unwrap();
    assert_eq!(documents.total, 1);
    assert_eq!(documents.page_size, 20);
    assert_eq!(documents.items[0].id, slides.id);

    let everything = content.list(FileFilter::default(), 1, 20).await.unwrap();
    assert_eq!(everything.total, 2);
}

#[tokio::test]
async fn test_only_the_uploader_may_delete() {
    let app = TestApp::new();
    let content = app.platform.content();
    let owner = AccountId::new(1);
    let file = content
        .upload(upload(b"notes".to_vec(), "notes.md", "document", owner))
        .await
        .unwrap();

    let error = content.delete(file.id, AccountId::new(2)).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Forbidden);
    assert!(content.get_by_id(file.id).await.is_ok());
    assert!(app.storage.object(&file.file_path).await.is_some());

    content.delete(file.id, owner).await.unwrap();
    assert_eq!(
        content.get_by_id(file.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert!(app.storage.object(&file.file_path).await.is_none());
}

#[tokio::test]
async fn test_listing_reflects_new_uploads_after_being_cached() {
    let app = TestApp::new();
    let content = app.platform.content();
    let filter = FileFilter {
        course_id: Some(CourseId::new(3)),
        ..FileFilter::default()
    };

    assert_eq!(content.list(filter.clone(), 1, 20).await.unwrap().total, 0);

    content
        .upload(upload(b"notes".to_vec(), "notes.txt", "document", AccountId::new(1)))
        .await
        .unwrap();

    assert_eq!(content.list(filter, 1, 20).await.unwrap().total, 1);
}
