//! Local-disk storage for problem attachments.
//!
//! Files are kept under the configured upload directory using the
//! client-supplied filename. A repeated name overwrites the previous file
//! (last write wins); callers must tolerate collisions.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::config::UploadConfig;
use crate::core::error::{AppError, Result};

pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            root: PathBuf::from(&config.dir),
        }
    }

    /// Ensure the upload directory exists, creating it if needed.
    pub async fn ensure_dir_exists(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        info!("Upload directory ready: {}", self.root.display());

        Ok(())
    }

    /// Persist an attachment and return the stored path for the problem row.
    ///
    /// The name is reduced to its final path component before joining, so a
    /// crafted filename cannot escape the upload root. Collisions are not
    /// prevented: the latest write wins.
    pub async fn save(&self, file_name: &str, data: &[u8]) -> Result<String> {
        let name = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("Invalid file name".to_string()))?;

        let path = self.root.join(name);

        tokio::fs::write(&path, data).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to store attachment {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> UploadStore {
        UploadStore::new(&UploadConfig {
            dir: dir.path().to_string_lossy().into_owned(),
        })
    }

    #[tokio::test]
    async fn test_save_writes_file_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stored = store.save("pothole.jpg", b"image-bytes").await.unwrap();

        assert_eq!(stored, dir.path().join("pothole.jpg").to_string_lossy());
        let contents = std::fs::read(dir.path().join("pothole.jpg")).unwrap();
        assert_eq!(contents, b"image-bytes");
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("report.txt", b"first").await.unwrap();
        store.save("report.txt", b"second").await.unwrap();

        let contents = std::fs::read(dir.path().join("report.txt")).unwrap();
        assert_eq!(contents, b"second");
    }

    #[tokio::test]
    async fn test_traversal_name_stays_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("../escape.txt", b"data").await.unwrap();

        assert!(dir.path().join("escape.txt").exists());
        assert!(!dir.path().parent().unwrap().join("escape.txt").exists());
    }

    #[tokio::test]
    async fn test_directory_only_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.save("..", b"data").await.is_err());
        assert!(store.save("", b"data").await.is_err());
    }
}
