use serde::{Deserialize, Serialize};

/// One registered video. Serialized field names match the persisted
/// JSON layout (`isActive`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Unique within the registry, assigned by the registry, immutable.
    pub id: String,
    pub name: String,
    /// Absolute URL to the playable media. Opaque to the registry.
    pub url: String,
    /// Gates the playback path; inactive videos resolve as "not found".
    pub is_active: bool,
    /// Epoch milliseconds, set once at creation. Sort key for listing.
    pub created_at: i64,
}

/// Partial update applied over an existing record. Fields left `None`
/// are preserved. `id` and `createdAt` are deliberately absent: they
/// cannot be altered through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
}

impl VideoPatch {
    /// Patch that only flips the active flag.
    pub fn active(flag: bool) -> Self {
        Self {
            is_active: Some(flag),
            ..Self::default()
        }
    }

    /// Shallow merge over `record`.
    pub fn apply(&self, record: &mut VideoRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(url) = &self.url {
            record.url = url.clone();
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
    }
}

/// Built-in records written once when the registry is first accessed
/// with no prior persisted state, so a fresh install has something to
/// show.
pub fn seed_records(now: i64) -> Vec<VideoRecord> {
    vec![
        VideoRecord {
            id: String::from("example-1"),
            name: String::from("Sample Nature Video"),
            url: String::from(
                "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            ),
            is_active: true,
            created_at: now - 10_000,
        },
        VideoRecord {
            id: String::from("example-2"),
            name: String::from("Sample Animation"),
            url: String::from(
                "https://storage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            ),
            is_active: false,
            created_at: now,
        },
    ]
}
