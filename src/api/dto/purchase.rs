//! DTOs for the purchase notification endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Track;

/// Request body for `POST /api/purchase`.
///
/// All fields are optional at the deserialization layer so a missing field
/// reaches the handler and is answered with the endpoint's own
/// `Missing required fields` response rather than a generic decode error.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub beats: Option<Vec<Track>>,
}

/// Success body for `POST /api/purchase`.
#[derive(Debug, Serialize)]
pub struct PurchaseAccepted {
    pub message: String,
}

impl PurchaseAccepted {
    pub fn new() -> Self {
        Self {
            message: "Email sent successfully".to_string(),
        }
    }
}

impl Default for PurchaseAccepted {
    fn default() -> Self {
        Self::new()
    }
}
