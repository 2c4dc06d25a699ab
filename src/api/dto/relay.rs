//! Query parameters for the audio relay endpoint.

use serde::Deserialize;

/// Query parameters for `GET /api/audio-proxy`.
#[derive(Debug, Deserialize)]
pub struct RelayParams {
    /// Google Drive file id of the requested preview.
    pub id: Option<String>,
}
