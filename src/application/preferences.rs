//! Per-profile presentation preferences, stored next to the video
//! list in their own slots.

use crate::application::registry::RegistryError;
use crate::domain::theme::Theme;
use crate::ports::storage::StorageArea;

pub const THEME_KEY: &str = "theme";

pub struct Preferences<S> {
    storage: S,
}

impl<S: StorageArea> Preferences<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored theme choice. An unknown stored value counts as
    /// "nothing stored".
    pub async fn theme(&self) -> Result<Option<Theme>, RegistryError> {
        let raw = self
            .storage
            .read(THEME_KEY)
            .await
            .map_err(RegistryError::Storage)?;
        Ok(raw.and_then(|value| value.parse().ok()))
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), RegistryError> {
        self.storage
            .write(THEME_KEY, theme.as_str())
            .await
            .map_err(RegistryError::Storage)
    }

    /// Flip the stored theme, starting from `fallback` when nothing
    /// is stored yet. Returns the new value.
    pub async fn toggle_theme(&self, fallback: Theme) -> Result<Theme, RegistryError> {
        let next = self.theme().await?.unwrap_or(fallback).toggled();
        self.set_theme(next).await?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::local::memory::MemoryStorageArea;

    #[tokio::test]
    async fn theme_round_trips() {
        let prefs = Preferences::new(MemoryStorageArea::new());
        assert_eq!(prefs.theme().await.unwrap(), None);
        prefs.set_theme(Theme::Dark).await.unwrap();
        assert_eq!(prefs.theme().await.unwrap(), Some(Theme::Dark));
    }

    #[tokio::test]
    async fn toggling_starts_from_the_fallback() {
        let prefs = Preferences::new(MemoryStorageArea::new());
        assert_eq!(prefs.toggle_theme(Theme::Light).await.unwrap(), Theme::Dark);
        assert_eq!(prefs.toggle_theme(Theme::Light).await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn garbage_in_the_slot_counts_as_unset() {
        let area = MemoryStorageArea::new();
        area.seed(THEME_KEY, "mauve");
        let prefs = Preferences::new(area);
        assert_eq!(prefs.theme().await.unwrap(), None);
    }
}
