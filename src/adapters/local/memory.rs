use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::storage::StorageArea;

/// In-memory [`StorageArea`]. Used as the substitutable fake in tests
/// and for throwaway runs that should not touch the disk.
#[derive(Clone, Default)]
pub struct MemoryStorageArea {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorageArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, bypassing the port. Test setup helper.
    pub fn seed(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_owned(), value.to_owned());
    }

    /// Peek at the raw slot contents, bypassing the port.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned()
    }
}

#[async_trait]
impl StorageArea for MemoryStorageArea {
    async fn read(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .slots
            .lock()
            .map_err(|_| "storage mutex poisoned")?
            .get(key)
            .cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.slots
            .lock()
            .map_err(|_| "storage mutex poisoned")?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.slots
            .lock()
            .map_err(|_| "storage mutex poisoned")?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_write_remove_round_trip() {
        let area = MemoryStorageArea::new();
        assert_eq!(area.read("k").await.unwrap(), None);

        area.write("k", "v").await.unwrap();
        assert_eq!(area.read("k").await.unwrap().as_deref(), Some("v"));

        area.write("k", "v2").await.unwrap();
        assert_eq!(area.read("k").await.unwrap().as_deref(), Some("v2"));

        area.remove("k").await.unwrap();
        assert_eq!(area.read("k").await.unwrap(), None);
        // Removing again is fine.
        area.remove("k").await.unwrap();
    }
}
