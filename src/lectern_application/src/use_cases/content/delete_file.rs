use lectern_core::{AccountId, FileId, FileStore, InputError, ObjectStorage, ServiceError};

use crate::FileRepository;

/// Delete file use case - only the uploader may delete
pub struct DeleteFileUseCase<F, O>
where
    F: FileStore,
    O: ObjectStorage,
{
    files: FileRepository<F>,
    storage: O,
}

impl<F, O> DeleteFileUseCase<F, O>
where
    F: FileStore,
    O: ObjectStorage,
{
    pub fn new(files: FileRepository<F>, storage: O) -> Self {
        Self { files, storage }
    }

    /// The record is deleted first. A failure to remove the stored object
    /// afterwards is logged and the deletion still succeeds.
    #[tracing::instrument(name = "DeleteFileUseCase::execute", skip(self))]
    pub async fn execute(&self, id: FileId, requester: AccountId) -> Result<(), ServiceError> {
        if id.is_unset() {
            return Err(InputError::MissingId("file id").into());
        }

        let file = self.files.get_by_id(id).await?;
        if file.uploader_id != requester {
            return Err(ServiceError::Forbidden(
                "only the uploader may delete this file".to_string(),
            ));
        }

        self.files.delete(&file).await?;
        if let Err(e) = self.storage.remove(&file.file_path).await {
            tracing::warn!(path = %file.file_path, error = %e, "stored object left behind");
        }
        Ok(())
    }
}
