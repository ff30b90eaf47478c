use chrono::Utc;
use lectern_core::{
    FileAsset, FileStore, NewFileAsset, ObjectStorage, ServiceError, UploadRequest,
    ValidatedUpload, domain::file_asset::extension_of,
};
use uuid::Uuid;

use crate::FileRepository;

/// Upload use case - validates, stores the bytes, then records the metadata
pub struct UploadFileUseCase<F, O>
where
    F: FileStore,
    O: ObjectStorage,
{
    files: FileRepository<F>,
    storage: O,
}

impl<F, O> UploadFileUseCase<F, O>
where
    F: FileStore,
    O: ObjectStorage,
{
    pub fn new(files: FileRepository<F>, storage: O) -> Self {
        Self { files, storage }
    }

    /// Every check runs before storage, store or cache are touched. If the
    /// record cannot be written the stored object is removed again.
    #[tracing::instrument(
        name = "UploadFileUseCase::execute",
        skip(self, request),
        fields(file_name = %request.file_name, size = request.bytes.len())
    )]
    pub async fn execute(&self, request: UploadRequest) -> Result<FileAsset, ServiceError> {
        let upload = request.validate()?;
        let key = storage_key(&upload);

        let stored = self.storage.put(&key, &upload.bytes).await?;
        let metadata = NewFileAsset {
            course_id: upload.course_id,
            uploader_id: upload.uploader_id,
            file_size: upload.bytes.len() as i64,
            file_name: upload.file_name,
            file_path: stored.path.clone(),
            file_url: stored.url,
            file_type: upload.file_type,
        };

        match self.files.create(metadata).await {
            Ok(file) => {
                tracing::info!(file_id = %file.id, "file uploaded");
                Ok(file)
            }
            Err(e) => {
                if let Err(cleanup) = self.storage.remove(&stored.path).await {
                    tracing::warn!(path = %stored.path, error = %cleanup, "orphaned object after failed insert");
                }
                Err(e)
            }
        }
    }
}

/// `avatars/<ts>_<uuid><ext>` for avatar uploads, `course_<id>/<ts>_<uuid><ext>` otherwise.
fn storage_key(upload: &ValidatedUpload) -> String {
    let directory = if upload.course_id.is_unset() {
        "avatars".to_string()
    } else {
        format!("course_{}", upload.course_id)
    };
    format!(
        "{directory}/{}_{}{}",
        Utc::now().timestamp(),
        Uuid::new_v4().simple(),
        extension_of(&upload.file_name).to_lowercase()
    )
}
