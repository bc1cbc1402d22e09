//! The video registry: durable CRUD over [`VideoRecord`]s, backed by
//! a single serialized blob in a [`StorageArea`] slot.
//!
//! Policies owned here:
//! - listing is always sorted by `createdAt`, newest first;
//! - ids and creation times are assigned by the registry, never by
//!   callers, and are immutable afterwards;
//! - a corrupt or foreign blob in the slot is logged, discarded and
//!   treated as empty (it never escalates to the caller);
//! - an unavailable storage area propagates as [`RegistryError`].

use std::error::Error;
use std::fmt;

use crate::domain::id::{new_video_id, now_millis};
use crate::domain::video::{seed_records, VideoPatch, VideoRecord};
use crate::ports::storage::StorageArea;

/// Slot holding the JSON-encoded array of records.
pub const STORAGE_KEY: &str = "qr-video-player-videos";

#[derive(Debug)]
pub enum RegistryError {
    /// The storage area itself failed (read or write).
    Storage(Box<dyn Error + Send + Sync>),
    Serialization(serde_json::Error),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Storage(e) => write!(f, "storage area unavailable: {}", e),
            RegistryError::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegistryError::Storage(e) => Some(e.as_ref()),
            RegistryError::Serialization(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization(err)
    }
}

pub struct VideoRegistry<S> {
    storage: S,
}

impl<S: StorageArea> VideoRegistry<S> {
    /// Open the registry over `storage`, seeding it on first access.
    pub async fn open(storage: S) -> Result<Self, RegistryError> {
        let registry = Self { storage };
        registry.initialize_if_empty().await?;
        Ok(registry)
    }

    /// Write the two seed records, but only if no blob exists yet
    /// under the slot. An existing blob, even an empty array, is
    /// never overwritten. Idempotent.
    pub async fn initialize_if_empty(&self) -> Result<(), RegistryError> {
        let existing = self
            .storage
            .read(STORAGE_KEY)
            .await
            .map_err(RegistryError::Storage)?;
        if existing.is_none() {
            tracing::info!("no stored video list found, writing seed records");
            self.write_all(&seed_records(now_millis())).await?;
        }
        Ok(())
    }

    /// All records, newest first. A blob that fails to parse as a
    /// record array (corrupt or foreign data) is discarded from the
    /// slot and an empty list is returned.
    pub async fn list(&self) -> Result<Vec<VideoRecord>, RegistryError> {
        let raw = self
            .storage
            .read(STORAGE_KEY)
            .await
            .map_err(RegistryError::Storage)?;
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };
        let mut records: Vec<VideoRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(%err, "stored video list is corrupt, clearing the slot");
                self.storage
                    .remove(STORAGE_KEY)
                    .await
                    .map_err(RegistryError::Storage)?;
                return Ok(Vec::new());
            }
        };
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// The record with the given id, or `None`. Linear scan; the
    /// collection is small enough that no index is warranted.
    pub async fn get(&self, id: &str) -> Result<Option<VideoRecord>, RegistryError> {
        Ok(self.list().await?.into_iter().find(|v| v.id == id))
    }

    /// Create a record with a fresh id and creation time, active by
    /// default. `name` and `url` are stored verbatim; validation is
    /// the caller's concern. The record is prepended and the whole
    /// list rewritten in one storage write.
    pub async fn insert(&self, name: &str, url: &str) -> Result<VideoRecord, RegistryError> {
        let mut records = self.list().await?;
        let now = now_millis();
        let record = VideoRecord {
            id: new_video_id(now),
            name: name.to_owned(),
            url: url.to_owned(),
            is_active: true,
            created_at: now,
        };
        records.insert(0, record.clone());
        self.write_all(&records).await?;
        tracing::debug!(id = %record.id, "registered video");
        Ok(record)
    }

    /// Merge `patch` over the record with the given id and rewrite
    /// the list. Returns `Ok(None)` without writing when the id is
    /// unknown. `id` and `createdAt` cannot change: the patch type
    /// does not carry them.
    pub async fn update(
        &self,
        id: &str,
        patch: VideoPatch,
    ) -> Result<Option<VideoRecord>, RegistryError> {
        let mut records = self.list().await?;
        let Some(target) = records.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };
        patch.apply(target);
        let updated = target.clone();
        self.write_all(&records).await?;
        Ok(Some(updated))
    }

    async fn write_all(&self, records: &[VideoRecord]) -> Result<(), RegistryError> {
        let blob = serde_json::to_string(records)?;
        self.storage
            .write(STORAGE_KEY, &blob)
            .await
            .map_err(RegistryError::Storage)
    }
}
