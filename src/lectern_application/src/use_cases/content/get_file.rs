use lectern_core::{FileAsset, FileId, FileStore, InputError, ServiceError};

use crate::FileRepository;

pub struct GetFileUseCase<F>
where
    F: FileStore,
{
    files: FileRepository<F>,
}

impl<F> GetFileUseCase<F>
where
    F: FileStore,
{
    pub fn new(files: FileRepository<F>) -> Self {
        Self { files }
    }

    #[tracing::instrument(name = "GetFileUseCase::execute", skip(self))]
    pub async fn execute(&self, id: FileId) -> Result<FileAsset, ServiceError> {
        if id.is_unset() {
            return Err(InputError::MissingId("file id").into());
        }
        self.files.get_by_id(id).await
    }
}
