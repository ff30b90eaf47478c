use lectern_application::{
    DeleteFileUseCase, FileRepository, GetFileUseCase, ListFilesUseCase, UploadFileUseCase,
};
use lectern_core::{
    AccountId, FileAsset, FileFilter, FileId, FilePage, FileStore, ObjectStorage, ServiceError,
    UploadRequest,
};

/// Uploaded course material and avatars.
#[derive(Clone)]
pub struct ContentService<F, O> {
    files: FileRepository<F>,
    storage: O,
}

impl<F, O> ContentService<F, O>
where
    F: FileStore + Clone,
    O: ObjectStorage + Clone,
{
    pub fn new(files: FileRepository<F>, storage: O) -> Self {
        Self { files, storage }
    }

    pub async fn upload(&self, request: UploadRequest) -> Result<FileAsset, ServiceError> {
        UploadFileUseCase::new(self.files.clone(), self.storage.clone())
            .execute(request)
            .await
    }

    pub async fn list(
        &self,
        filter: FileFilter,
        page: u32,
        page_size: u32,
    ) -> Result<FilePage, ServiceError> {
        ListFilesUseCase::new(self.files.clone())
            .execute(filter, page, page_size)
            .await
    }

    pub async fn get_by_id(&self, id: FileId) -> Result<FileAsset, ServiceError> {
        GetFileUseCase::new(self.files.clone()).execute(id).await
    }

    pub async fn delete(&self, id: FileId, requester: AccountId) -> Result<(), ServiceError> {
        DeleteFileUseCase::new(self.files.clone(), self.storage.clone())
            .execute(id, requester)
            .await
    }
}
