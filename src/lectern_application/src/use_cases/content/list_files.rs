use lectern_core::{FileFilter, FilePage, FileQuery, FileStore, PageRequest, ServiceError};

use crate::FileRepository;

pub struct ListFilesUseCase<F>
where
    F: FileStore,
{
    files: FileRepository<F>,
}

impl<F> ListFilesUseCase<F>
where
    F: FileStore,
{
    pub fn new(files: FileRepository<F>) -> Self {
        Self { files }
    }

    /// `page_size` 0 means 20, sizes cap at 100. Newest upload first.
    #[tracing::instrument(name = "ListFilesUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        filter: FileFilter,
        page: u32,
        page_size: u32,
    ) -> Result<FilePage, ServiceError> {
        let query = FileQuery {
            filter,
            page: PageRequest::for_files(page, page_size),
        };
        self.files.list(&query).await
    }
}
