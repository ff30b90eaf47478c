use std::path::{Component, Path, PathBuf};

use lectern_core::{ObjectStorage, StorageError, StoredObject};

/// Stores objects as files under a root directory and serves them from
/// `base_url`.
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "key must be a relative path without parent references".to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for LocalDiskStorage {
    #[tracing::instrument(name = "Writing object to disk", skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<StoredObject, StorageError> {
        let path = self.resolve(key)?;
        let write_error = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
        }
        tokio::fs::write(&path, bytes).await.map_err(write_error)?;

        Ok(StoredObject {
            path: path.to_string_lossy().into_owned(),
            url: format!("{}/{}", self.base_url, key),
        })
    }

    #[tracing::instrument(name = "Removing object from disk", skip(self))]
    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| StorageError::Remove {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}
