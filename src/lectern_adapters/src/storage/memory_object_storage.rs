use std::{collections::HashMap, sync::Arc};

use lectern_core::{ObjectStorage, StorageError, StoredObject};
use tokio::sync::RwLock;

const MEMORY_ROOT: &str = "memory://uploads";

/// Object storage held in process memory, for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryObjectStorage {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryObjectStorage {
    pub async fn object(&self, path: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(path).cloned()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<StoredObject, StorageError> {
        let path = format!("{MEMORY_ROOT}/{key}");
        self.objects
            .write()
            .await
            .insert(path.clone(), bytes.to_vec());

        Ok(StoredObject {
            path,
            url: format!("/uploads/{key}"),
        })
    }

    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        match self.objects.write().await.remove(path) {
            Some(_) => Ok(()),
            None => Err(StorageError::Remove {
                path: path.to_string(),
                reason: "no such object".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_remove() {
        let storage = MemoryObjectStorage::default();

        let stored = storage.put("course_1/a.pdf", b"abc").await.unwrap();
        assert!(stored.path.ends_with("course_1/a.pdf"));
        assert_eq!(stored.url, "/uploads/course_1/a.pdf");
        assert_eq!(storage.object(&stored.path).await, Some(b"abc".to_vec()));

        storage.remove(&stored.path).await.unwrap();
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_removing_unknown_path_fails() {
        let storage = MemoryObjectStorage::default();
        assert!(matches!(
            storage.remove("memory://uploads/nope").await,
            Err(StorageError::Remove { .. })
        ));
    }
}
