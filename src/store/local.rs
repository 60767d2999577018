use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::ClinicError;

use super::DocumentStore;

/// Stores each document as a file under a data directory.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ClinicError> {
        let path = path.into();
        tokio::fs::create_dir_all(&path).await.map_err(|e| {
            ClinicError::IoError(format!("creating directory {}: {}", path.display(), e))
        })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for LocalStore {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, ClinicError> {
        let file = self.path.join(name);
        match tokio::fs::read(&file).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClinicError::IoError(format!(
                "reading {}: {}",
                file.display(),
                e
            ))),
        }
    }

    async fn write(&self, name: &str, data: &[u8]) -> Result<(), ClinicError> {
        let file = self.path.join(name);
        tokio::fs::write(&file, data)
            .await
            .map_err(|e| ClinicError::IoError(format!("writing {}: {}", file.display(), e)))
    }
}
