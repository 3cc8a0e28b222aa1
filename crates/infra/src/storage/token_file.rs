//! File-backed token store
//!
//! Persists the bearer token as a small JSON file. Writes go through a
//! temp file in the same directory followed by a rename, so a crash
//! mid-write never leaves a truncated token behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use brick_core::TokenStore;
use brick_domain::{BrickError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn storage_error(context: &str, path: &Path, err: std::io::Error) -> BrickError {
        BrickError::Storage(format!("{context} {}: {err}", path.display()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::storage_error("Failed to read", &self.path, e)),
        };

        let stored: StoredToken = serde_json::from_str(&contents)
            .map_err(|e| BrickError::Storage(format!("Malformed token file: {e}")))?;
        Ok(Some(stored.access_token))
    }

    async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Self::storage_error("Failed to create", parent, e))?;
            }
        }

        let stored = StoredToken { access_token: token.to_string() };
        let contents = serde_json::to_string(&stored)
            .map_err(|e| BrickError::Storage(format!("Failed to encode token: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| Self::storage_error("Failed to write", &tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| Self::storage_error("Failed to replace", &self.path, e))?;

        debug!(path = %self.path.display(), "Token persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::storage_error("Failed to remove", &self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_survives_a_save_load_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));

        assert_eq!(store.load().await.unwrap(), None);

        store.save("tok-abc").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("tok-abc"));

        // A reopened store sees the same token
        let reopened = FileTokenStore::new(dir.path().join("token.json"));
        assert_eq!(reopened.load().await.unwrap().as_deref(), Some("tok-abc"));
    }

    #[tokio::test]
    async fn clear_removes_the_token_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));

        store.save("tok-abc").await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);

        // Clearing an absent token is not an error
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("state").join("token.json"));

        store.save("tok-abc").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("tok-abc"));
    }

    #[tokio::test]
    async fn malformed_file_reports_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = FileTokenStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, BrickError::Storage(_)));
    }
}
