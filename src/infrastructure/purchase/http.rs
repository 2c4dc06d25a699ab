//! HTTP purchase gateway.
//!
//! The storefront CLI's side of the checkout: posts a purchase submission to
//! a running server's `POST /api/purchase` endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::checkout::PurchaseSubmission;
use crate::domain::gateways::purchase_gateway::{PurchaseError, PurchaseGateway};

/// Error body shape the purchase endpoint answers with.
#[derive(Deserialize)]
struct PurchaseErrorBody {
    error: Option<String>,
}

pub struct HttpPurchaseGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPurchaseGateway {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/purchase", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PurchaseGateway for HttpPurchaseGateway {
    async fn submit(&self, submission: &PurchaseSubmission) -> Result<(), PurchaseError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PurchaseError::TimedOut
                } else {
                    PurchaseError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<PurchaseErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("Purchase endpoint returned {status}"));

        Err(PurchaseError::Rejected(message))
    }
}
