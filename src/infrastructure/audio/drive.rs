//! Google Drive audio source.

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use reqwest::header;

use crate::domain::gateways::audio_source::{AudioFetchError, AudioPayload, AudioSource};

/// Drive varies behavior by client, so the fetch identifies as a browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Fetches files from Google Drive's download endpoint.
///
/// The response body is handed over as a stream; nothing is buffered here,
/// so the relay stays a transparent pass-through.
pub struct DriveAudioSource {
    http: reqwest::Client,
    base_url: String,
}

impl DriveAudioSource {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn download_url(&self, file_id: &str) -> String {
        format!("{}?export=download&id={}", self.base_url, file_id)
    }
}

#[async_trait]
impl AudioSource for DriveAudioSource {
    async fn fetch(&self, file_id: &str) -> Result<AudioPayload, AudioFetchError> {
        let response = self
            .http
            .get(self.download_url(file_id))
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AudioFetchError::TimedOut
                } else {
                    AudioFetchError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        if !status.is_success() {
            return Err(AudioFetchError::UpstreamStatus {
                status: status.as_u16(),
                status_text,
            });
        }

        let content_length = response.content_length();

        // Drive signals blocked or quota-limited files with an empty body on
        // an otherwise successful response.
        if content_length == Some(0) {
            return Err(AudioFetchError::UpstreamStatus {
                status: status.as_u16(),
                status_text,
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes_stream()
            .map_err(std::io::Error::other)
            .boxed();

        Ok(AudioPayload {
            content_type,
            content_length,
            body,
        })
    }
}
