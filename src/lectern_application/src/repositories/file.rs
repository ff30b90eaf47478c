use lectern_core::{
    FileAsset, FileId, FilePage, FileQuery, FileStore, NewFileAsset, Page, ServiceError,
};

use super::{cache_aside::CacheAside, keys};

/// Cache-aside access to file records.
#[derive(Clone)]
pub struct FileRepository<S> {
    store: S,
    cache: CacheAside,
}

impl<S: FileStore> FileRepository<S> {
    pub fn new(store: S, cache: CacheAside) -> Self {
        Self { store, cache }
    }

    #[tracing::instrument(name = "FileRepository::get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: FileId) -> Result<FileAsset, ServiceError> {
        let key = keys::file_by_id(id);
        if let Some(file) = self.cache.fetch(&key).await {
            return Ok(file);
        }

        let file = self
            .cache
            .guard(self.store.find_by_id(id))
            .await
            .map_err(|e| ServiceError::from_store("file", e))?;
        self.cache.put_entity(&key, &file).await;
        Ok(file)
    }

    #[tracing::instrument(name = "FileRepository::create", skip_all, fields(file_name = %file.file_name))]
    pub async fn create(&self, file: NewFileAsset) -> Result<FileAsset, ServiceError> {
        let file = self.cache.guard(self.store.insert(file)).await?;
        self.evict_listings(&file).await;
        self.cache
            .put_entity(&keys::file_by_id(file.id), &file)
            .await;
        Ok(file)
    }

    #[tracing::instrument(name = "FileRepository::delete", skip_all, fields(file_id = %file.id))]
    pub async fn delete(&self, file: &FileAsset) -> Result<(), ServiceError> {
        self.cache
            .guard(self.store.delete(file.id))
            .await
            .map_err(|e| ServiceError::from_store("file", e))?;
        self.cache.evict(&keys::file_by_id(file.id)).await;
        self.evict_listings(file).await;
        Ok(())
    }

    #[tracing::instrument(name = "FileRepository::list", skip(self))]
    pub async fn list(&self, query: &FileQuery) -> Result<FilePage, ServiceError> {
        let key = keys::file_list(&query.filter, query.page);
        if let Some(cached) = self.cache.fetch(&key).await {
            return Ok(cached);
        }

        let (items, total) = self.cache.guard(self.store.list(query)).await?;
        let listing = Page::new(items, total, query.page);
        self.cache.put_list(&key, &listing).await;
        Ok(listing)
    }

    async fn evict_listings(&self, file: &FileAsset) {
        self.cache
            .evict_matching(&keys::course_file_lists(file.course_id))
            .await;
        self.cache.evict_matching(keys::FILE_LISTS).await;
    }
}
