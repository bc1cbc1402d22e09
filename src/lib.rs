//! vidcode - Video registry with scannable playback links
//!
//! Hexagonal Architecture:
//! - domain/: Pure types (video records, ids, localization, theme)
//! - ports/: Trait definitions (storage area, upload transport)
//! - adapters/: Concrete implementations (file/memory storage, Cloudinary)
//! - application/: Services (registry, admin, playback, preferences)
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports for convenience
pub use adapters::local::{FileStorageArea, MemoryStorageArea};
pub use application::admin::AdminService;
pub use application::playback::PlaybackService;
pub use application::registry::VideoRegistry;
pub use config::AppConfig;
