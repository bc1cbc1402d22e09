//! Environment configuration.

use std::env;

/// Runtime configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding the storage area (video list, preferences)
    pub storage_dir: String,
    /// Cloudinary account (cloud) identifier
    pub cloudinary_cloud_name: String,
    /// Name of the unsigned upload preset
    pub cloudinary_upload_preset: String,
    /// Stock video substituted when URL-mode registration gives no URL
    pub placeholder_video_url: String,
    /// Base URL prefixed to player paths in generated links
    pub public_base_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            storage_dir: env::var("VIDCODE_STORAGE_DIR")
                .unwrap_or_else(|_| String::from("./.vidcode")),
            cloudinary_cloud_name: env::var("CLOUDINARY_CLOUD_NAME")
                .unwrap_or_else(|_| String::new()),
            cloudinary_upload_preset: env::var("CLOUDINARY_UPLOAD_PRESET")
                .unwrap_or_else(|_| String::from("unsigned_uploads")),
            placeholder_video_url: env::var("PLACEHOLDER_VIDEO_URL").unwrap_or_else(|_| {
                String::from(
                    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
                )
            }),
            public_base_url: env::var("VIDCODE_PUBLIC_URL")
                .unwrap_or_else(|_| String::from("http://localhost:8080")),
        }
    }
}
