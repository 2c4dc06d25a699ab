//! Third-party audio host contract.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use thiserror::Error;

/// Streamed upstream response body.
pub type AudioStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

/// A successfully opened upstream audio file, ready to be streamed through
/// to the client without buffering.
pub struct AudioPayload {
    /// Upstream `Content-Type`, if any. The relay defaults to `audio/mpeg`.
    pub content_type: Option<String>,
    /// Upstream `Content-Length`, if any; forwarded verbatim.
    pub content_length: Option<u64>,
    pub body: AudioStream,
}

#[derive(Debug, Error)]
pub enum AudioFetchError {
    /// The upstream answered but not with a usable file. The relay mirrors
    /// the status and reports the status text as the body.
    #[error("{status_text}")]
    UpstreamStatus { status: u16, status_text: String },

    /// The outbound fetch exceeded its bounded timeout.
    #[error("upstream request timed out")]
    TimedOut,

    /// Network fault before an upstream response arrived.
    #[error("{0}")]
    Transport(String),
}

/// Fetches preview audio files from the third-party storage provider.
#[async_trait]
pub trait AudioSource: Send + Sync {
    async fn fetch(&self, file_id: &str) -> Result<AudioPayload, AudioFetchError>;
}
