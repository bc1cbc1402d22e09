//! Cloudinary unsigned-upload adapter for the [`UploadTransport`]
//! port.
//!
//! The transfer is a multipart POST (the file plus the unsigned
//! upload-preset field) against the account's video upload endpoint.
//! Progress is derived from the bytes handed to the HTTP transport,
//! chunk by chunk; the success response carries the hosted URL in its
//! `secure_url` field.

use std::io;

use bytes::Bytes;
use futures::channel::mpsc;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use futures::SinkExt;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::ports::transport::{UploadError, UploadEvent, UploadSource, UploadTransport};

const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Clone)]
pub struct CloudinaryTransport {
    client: reqwest::Client,
    endpoint: String,
    upload_preset: String,
}

impl CloudinaryTransport {
    pub fn new(cloud_name: &str, upload_preset: &str) -> Self {
        Self::with_endpoint(
            format!(
                "https://api.cloudinary.com/v1_1/{}/video/upload",
                cloud_name
            ),
            upload_preset,
        )
    }

    /// Endpoint override for tests and self-hosted gateways.
    pub fn with_endpoint(endpoint: impl Into<String>, upload_preset: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            upload_preset: upload_preset.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

impl UploadTransport for CloudinaryTransport {
    fn upload(
        &self,
        file: UploadSource,
        cancel: CancellationToken,
    ) -> BoxStream<'static, UploadEvent> {
        let (mut tx, rx) = mpsc::channel::<UploadEvent>(16);
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let preset = self.upload_preset.clone();

        tokio::spawn(async move {
            let outcome = {
                let progress = tx.clone();
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(UploadError::Cancelled),
                    result = send_file(&client, &endpoint, &preset, file, progress) => result,
                }
            };
            let event = match outcome {
                Ok(url) => UploadEvent::Completed(url),
                Err(err) => UploadEvent::Failed(err),
            };
            let _ = tx.send(event).await;
        });

        rx.boxed()
    }
}

async fn send_file(
    client: &reqwest::Client,
    endpoint: &str,
    preset: &str,
    file: UploadSource,
    progress: mpsc::Sender<UploadEvent>,
) -> Result<String, UploadError> {
    let total = file.content.len() as u64;
    let body = Body::wrap_stream(progress_chunks(file.content, progress));
    let part = Part::stream_with_length(body, total).file_name(file.file_name);
    let form = Form::new()
        .text("upload_preset", preset.to_owned())
        .part("file", part);

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: UploadResponse = response
        .json()
        .await
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
    parsed
        .secure_url
        .ok_or_else(|| UploadError::MalformedResponse("response missing secure_url".to_owned()))
}

/// Chunk `content` for the request body, reporting the percentage of
/// bytes handed over after each chunk. Percentages are deduplicated
/// so the emitted sequence is strictly increasing.
fn progress_chunks(
    content: Bytes,
    progress: mpsc::Sender<UploadEvent>,
) -> impl Stream<Item = Result<Bytes, io::Error>> + Send {
    let total = content.len() as u64;
    stream::unfold(
        (content, 0u64, 0u8, progress),
        move |(mut remaining, sent, last_pct, mut progress)| async move {
            if remaining.is_empty() {
                return None;
            }
            let take = remaining.len().min(CHUNK_SIZE);
            let chunk = remaining.split_to(take);
            let sent = sent + take as u64;
            // total > 0 here, remaining was non-empty
            let pct = (sent * 100 / total) as u8;
            if pct > last_pct {
                let _ = progress.send(UploadEvent::Progress(pct)).await;
            }
            Some((Ok(chunk), (remaining, sent, pct.max(last_pct), progress)))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chunks_reassemble_and_progress_is_increasing() {
        let payload = Bytes::from(vec![7u8; 150_000]);
        let (tx, mut rx) = mpsc::channel::<UploadEvent>(16);

        let chunks: Vec<_> = progress_chunks(payload.clone(), tx).collect().await;
        let mut reassembled = Vec::new();
        for chunk in chunks {
            reassembled.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(Bytes::from(reassembled), payload);

        let mut pcts = Vec::new();
        while let Ok(Some(event)) = rx.try_next() {
            match event {
                UploadEvent::Progress(pct) => pcts.push(pct),
                other => panic!("unexpected event: {:?}", other),
            }
        }
        assert!(!pcts.is_empty());
        assert!(pcts.windows(2).all(|p| p[0] < p[1]));
        assert_eq!(*pcts.last().unwrap(), 100);
    }

    #[tokio::test]
    async fn empty_payload_emits_no_progress() {
        let (tx, mut rx) = mpsc::channel::<UploadEvent>(16);
        let chunks: Vec<_> = progress_chunks(Bytes::new(), tx).collect().await;
        assert!(chunks.is_empty());
        assert!(matches!(rx.try_next(), Ok(None)));
    }

    #[tokio::test]
    async fn cancelled_before_start_fails_with_cancelled() {
        let transport = CloudinaryTransport::with_endpoint("http://127.0.0.1:9/upload", "preset");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let file = UploadSource {
            file_name: "clip.mp4".to_owned(),
            content: Bytes::from_static(b"bytes"),
        };
        let events: Vec<_> = transport.upload(file, cancel).collect().await;
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            UploadEvent::Failed(UploadError::Cancelled)
        ));
    }

    #[test]
    fn endpoint_is_parameterized_by_cloud_name() {
        let transport = CloudinaryTransport::new("demo-cloud", "unsigned_uploads");
        assert_eq!(
            transport.endpoint,
            "https://api.cloudinary.com/v1_1/demo-cloud/video/upload"
        );
    }
}
