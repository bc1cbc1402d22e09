//! Admin-facing operations: registering videos (by URL or by file
//! upload) and toggling their visibility.
//!
//! The propagation policy lives here: in file mode a record is only
//! inserted after the transport has produced a hosted URL, so a
//! failed upload never leaves a partial record behind. The
//! placeholder URL substitution applies to URL mode only.

use std::error::Error;
use std::fmt;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::application::registry::{RegistryError, VideoRegistry};
use crate::domain::video::{VideoPatch, VideoRecord};
use crate::ports::storage::StorageArea;
use crate::ports::transport::{UploadError, UploadEvent, UploadSource, UploadTransport};

#[derive(Debug)]
pub enum AdminError {
    /// The video name was empty. Caught before any store or
    /// transport call.
    EmptyName,
    Upload(UploadError),
    Registry(RegistryError),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::EmptyName => write!(f, "video name must not be empty"),
            AdminError::Upload(e) => write!(f, "upload failed: {}", e),
            AdminError::Registry(e) => write!(f, "{}", e),
        }
    }
}

impl Error for AdminError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AdminError::EmptyName => None,
            AdminError::Upload(e) => Some(e),
            AdminError::Registry(e) => Some(e),
        }
    }
}

impl From<UploadError> for AdminError {
    fn from(err: UploadError) -> Self {
        AdminError::Upload(err)
    }
}

impl From<RegistryError> for AdminError {
    fn from(err: RegistryError) -> Self {
        AdminError::Registry(err)
    }
}

pub struct AdminService<S, T> {
    registry: VideoRegistry<S>,
    transport: T,
    placeholder_url: String,
}

impl<S, T> AdminService<S, T>
where
    S: StorageArea,
    T: UploadTransport,
{
    pub fn new(registry: VideoRegistry<S>, transport: T, placeholder_url: String) -> Self {
        Self {
            registry,
            transport,
            placeholder_url,
        }
    }

    pub async fn list(&self) -> Result<Vec<VideoRecord>, AdminError> {
        Ok(self.registry.list().await?)
    }

    /// Register a video by direct URL. An absent or blank URL falls
    /// back to the configured placeholder; this substitution never
    /// happens in file mode.
    pub async fn register_from_url(
        &self,
        name: &str,
        url: Option<&str>,
    ) -> Result<VideoRecord, AdminError> {
        if name.trim().is_empty() {
            return Err(AdminError::EmptyName);
        }
        let url = match url {
            Some(u) if !u.trim().is_empty() => u,
            _ => self.placeholder_url.as_str(),
        };
        Ok(self.registry.insert(name, url).await?)
    }

    /// Upload `file` and register the hosted URL. Progress
    /// percentages are forwarded to `on_progress`. On any transport
    /// failure the error surfaces and nothing is inserted.
    pub async fn register_from_file(
        &self,
        name: &str,
        file: UploadSource,
        cancel: CancellationToken,
        mut on_progress: impl FnMut(u8) + Send,
    ) -> Result<VideoRecord, AdminError> {
        if name.trim().is_empty() {
            return Err(AdminError::EmptyName);
        }
        let mut events = self.transport.upload(file, cancel);
        let mut hosted_url = None;
        while let Some(event) = events.next().await {
            match event {
                UploadEvent::Progress(pct) => on_progress(pct),
                UploadEvent::Completed(url) => {
                    hosted_url = Some(url);
                    break;
                }
                UploadEvent::Failed(err) => return Err(AdminError::Upload(err)),
            }
        }
        let url = hosted_url.ok_or_else(|| {
            AdminError::Upload(UploadError::Transport(
                "transfer ended without a result".to_owned(),
            ))
        })?;
        Ok(self.registry.insert(name, &url).await?)
    }

    /// Flip the active flag of the given record. `Ok(None)` when the
    /// id is unknown.
    pub async fn toggle_active(&self, id: &str) -> Result<Option<VideoRecord>, AdminError> {
        let Some(current) = self.registry.get(id).await? else {
            return Ok(None);
        };
        Ok(self
            .registry
            .update(id, VideoPatch::active(!current.is_active))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::local::memory::MemoryStorageArea;
    use bytes::Bytes;
    use futures::stream::{self, BoxStream};
    use std::sync::Mutex;

    /// Transport fake replaying a scripted event sequence.
    struct ScriptedTransport {
        events: Mutex<Option<Vec<UploadEvent>>>,
    }

    impl ScriptedTransport {
        fn new(events: Vec<UploadEvent>) -> Self {
            Self {
                events: Mutex::new(Some(events)),
            }
        }
    }

    impl UploadTransport for ScriptedTransport {
        fn upload(
            &self,
            _file: UploadSource,
            _cancel: CancellationToken,
        ) -> BoxStream<'static, UploadEvent> {
            let events = self
                .events
                .lock()
                .unwrap()
                .take()
                .expect("transport used once");
            Box::pin(stream::iter(events))
        }
    }

    fn source() -> UploadSource {
        UploadSource {
            file_name: "clip.mp4".to_owned(),
            content: Bytes::from_static(b"fake video bytes"),
        }
    }

    async fn service(events: Vec<UploadEvent>) -> AdminService<MemoryStorageArea, ScriptedTransport> {
        let registry = VideoRegistry::open(MemoryStorageArea::new()).await.unwrap();
        AdminService::new(
            registry,
            ScriptedTransport::new(events),
            "https://x/placeholder.mp4".to_owned(),
        )
    }

    #[tokio::test]
    async fn url_mode_falls_back_to_the_placeholder() {
        let svc = service(vec![]).await;
        let record = svc.register_from_url("Named", None).await.unwrap();
        assert_eq!(record.url, "https://x/placeholder.mp4");
        let record = svc.register_from_url("Named", Some("  ")).await.unwrap();
        assert_eq!(record.url, "https://x/placeholder.mp4");
        let record = svc
            .register_from_url("Named", Some("https://x/real.mp4"))
            .await
            .unwrap();
        assert_eq!(record.url, "https://x/real.mp4");
    }

    #[tokio::test]
    async fn empty_name_is_rejected_before_any_side_effect() {
        let svc = service(vec![]).await;
        let before = svc.list().await.unwrap();
        assert!(matches!(
            svc.register_from_url("   ", None).await,
            Err(AdminError::EmptyName)
        ));
        assert!(matches!(
            svc.register_from_file("", source(), CancellationToken::new(), |_| {})
                .await,
            Err(AdminError::EmptyName)
        ));
        assert_eq!(svc.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn file_mode_inserts_the_hosted_url_and_reports_progress() {
        let svc = service(vec![
            UploadEvent::Progress(30),
            UploadEvent::Progress(100),
            UploadEvent::Completed("https://cdn/clip.mp4".to_owned()),
        ])
        .await;

        let mut seen = Vec::new();
        let record = svc
            .register_from_file("Clip", source(), CancellationToken::new(), |pct| {
                seen.push(pct)
            })
            .await
            .unwrap();
        assert_eq!(record.url, "https://cdn/clip.mp4");
        assert_eq!(seen, vec![30, 100]);
    }

    #[tokio::test]
    async fn file_mode_failure_surfaces_and_inserts_nothing() {
        let svc = service(vec![
            UploadEvent::Progress(10),
            UploadEvent::Failed(UploadError::Status {
                status: 401,
                body: "unauthorized preset".to_owned(),
            }),
        ])
        .await;

        let before = svc.list().await.unwrap();
        let err = svc
            .register_from_file("Clip", source(), CancellationToken::new(), |_| {})
            .await
            .unwrap_err();
        match err {
            AdminError::Upload(UploadError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized preset");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(svc.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn toggle_flips_only_the_active_flag() {
        let svc = service(vec![]).await;
        let record = svc
            .register_from_url("Named", Some("https://x/v.mp4"))
            .await
            .unwrap();

        let toggled = svc.toggle_active(&record.id).await.unwrap().unwrap();
        assert!(!toggled.is_active);
        assert_eq!(toggled.created_at, record.created_at);

        let toggled = svc.toggle_active(&record.id).await.unwrap().unwrap();
        assert!(toggled.is_active);

        assert!(svc.toggle_active("missing-id").await.unwrap().is_none());
    }
}
