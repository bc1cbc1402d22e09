//! Playback resolution: the path a scanned code takes.
//!
//! A code encodes `<public base>/player/<id>`; the player resolves
//! the id against the registry and only plays records that exist and
//! are active. Anything else is a user-facing "not found", not an
//! error.

use url::Url;

use crate::application::registry::{RegistryError, VideoRegistry};
use crate::domain::video::VideoRecord;
use crate::ports::storage::StorageArea;

pub struct PlaybackService<S> {
    registry: VideoRegistry<S>,
}

impl<S: StorageArea> PlaybackService<S> {
    pub fn new(registry: VideoRegistry<S>) -> Self {
        Self { registry }
    }

    /// Resolve an id scanned from a code. Inactive records resolve
    /// the same as missing ones.
    pub async fn resolve(&self, id: &str) -> Result<Option<VideoRecord>, RegistryError> {
        Ok(self
            .registry
            .get(id)
            .await?
            .filter(|record| record.is_active))
    }
}

/// Absolute player URL for a record: the string a code image encodes.
/// The application's own base URL (origin plus base path) is
/// prefixed to `player/<id>`.
pub fn player_url(public_base: &str, id: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(public_base)?;
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(&format!("player/{}", id))
}
