//! Audio relay orchestration.
//!
//! Thin pass-through in front of the [`AudioSource`]: it exists so the
//! handler stays free of upstream concerns and so fetch outcomes are logged
//! in one place.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::gateways::audio_source::{AudioFetchError, AudioPayload, AudioSource};

pub struct RelayService {
    source: Arc<dyn AudioSource>,
}

impl RelayService {
    pub fn new(source: Arc<dyn AudioSource>) -> Self {
        Self { source }
    }

    /// Opens an upstream audio file for streaming.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`AudioFetchError`] unchanged; the handler
    /// owns the mapping to the wire contract.
    pub async fn fetch(&self, file_id: &str) -> Result<AudioPayload, AudioFetchError> {
        debug!("Relaying audio file {file_id}");

        match self.source.fetch(file_id).await {
            Ok(payload) => {
                debug!(
                    "Upstream opened {file_id}: type={:?} length={:?}",
                    payload.content_type, payload.content_length
                );
                Ok(payload)
            }
            Err(e) => {
                warn!("Upstream fetch for {file_id} failed: {e}");
                Err(e)
            }
        }
    }
}
