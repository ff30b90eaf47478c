use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use lectern_core::{FileAsset, FileId, FileQuery, FileStore, NewFileAsset, StoreError};
use tokio::sync::RwLock;

#[derive(Default)]
struct FileTable {
    rows: HashMap<FileId, FileAsset>,
    last_id: i64,
}

#[derive(Default, Clone)]
pub struct HashmapFileStore {
    table: Arc<RwLock<FileTable>>,
}

impl HashmapFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl FileStore for HashmapFileStore {
    async fn insert(&self, file: NewFileAsset) -> Result<FileAsset, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let file = file.into_file(FileId::new(table.last_id), Utc::now());
        table.rows.insert(file.id, file.clone());
        Ok(file)
    }

    async fn find_by_id(&self, id: FileId) -> Result<FileAsset, StoreError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: FileId) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn list(&self, query: &FileQuery) -> Result<(Vec<FileAsset>, u64), StoreError> {
        let table = self.table.read().await;
        let mut files: Vec<FileAsset> = table
            .rows
            .values()
            .filter(|file| query.filter.matches(file))
            .cloned()
            .collect();
        files.sort_by(|a, b| (b.upload_time, b.id).cmp(&(a.upload_time, a.id)));
        Ok((query.page.slice(&files), files.len() as u64))
    }
}
