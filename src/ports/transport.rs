use std::fmt;

use bytes::Bytes;
use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

/// A file handed to the transport: name plus full contents. The
/// length of `content` is the total transfer size used for progress
/// percentages.
#[derive(Debug, Clone)]
pub struct UploadSource {
    pub file_name: String,
    pub content: Bytes,
}

/// Events produced while a transfer runs.
///
/// A transfer yields zero or more `Progress` values (percentages,
/// monotonically non-decreasing, emitted only when the total size is
/// known) and terminates with exactly one `Completed` or `Failed`.
#[derive(Debug)]
pub enum UploadEvent {
    Progress(u8),
    /// The hosted, retrievable URL of the uploaded file.
    Completed(String),
    Failed(UploadError),
}

#[derive(Debug)]
pub enum UploadError {
    /// Non-success HTTP status from the hosting endpoint. The raw
    /// response body is kept verbatim for diagnostics.
    Status { status: u16, body: String },
    /// Transport-level failure (connectivity, DNS, TLS).
    Transport(String),
    /// Success status but the response did not carry a retrievable URL.
    MalformedResponse(String),
    /// The caller cancelled the transfer.
    Cancelled,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Status { status, body } => {
                write!(f, "upload rejected with status {}: {}", status, body)
            }
            UploadError::Transport(e) => write!(f, "upload transport failed: {}", e),
            UploadError::MalformedResponse(e) => write!(f, "malformed upload response: {}", e),
            UploadError::Cancelled => write!(f, "upload cancelled"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Outbound port moving a local file to a remotely hosted,
/// URL-addressable copy.
pub trait UploadTransport: Send + Sync {
    /// Start transferring `file`. Cancelling `cancel` aborts the
    /// transfer; the stream then terminates with
    /// `Failed(UploadError::Cancelled)`.
    fn upload(
        &self,
        file: UploadSource,
        cancel: CancellationToken,
    ) -> BoxStream<'static, UploadEvent>;
}
