use async_trait::async_trait;
use std::error::Error;

/// A local key-value storage area, scoped to one profile directory.
///
/// This is the persistence seam of the registry: one key holds one
/// serialized blob, and a `write` replaces the whole blob in a single
/// call so a reader in the same process never observes a partial
/// write. Implementations do no retrying; an unavailable area fails
/// loudly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageArea: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>>;

    /// Replace the value under `key` in one write.
    async fn write(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Remove `key` and its value entirely. Removing an absent key is
    /// not an error.
    async fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
