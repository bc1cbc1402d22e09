use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::ports::storage::StorageArea;

/// File-backed [`StorageArea`]: one file per key under a profile
/// directory, the local analog of a browser storage area.
///
/// A write lands in a sibling temp file first and is renamed into
/// place, so readers in the same process only ever see the previous
/// or the new blob, never a torn one.
#[derive(Debug, Clone)]
pub struct FileStorageArea {
    dir: PathBuf,
}

impl FileStorageArea {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
        if !key_is_valid(key) {
            return Err(format!("invalid storage key: {:?}", key).into());
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

// Keys become file names; keep them to a safe alphabet.
fn key_is_valid(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[async_trait]
impl StorageArea for FileStorageArea {
    async fn read(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let path = self.slot_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let path = self.slot_path(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = temp_sibling(&path);
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let path = self.slot_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Box::new(e)),
        }
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
