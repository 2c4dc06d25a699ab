//! Resend-backed mailer.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::domain::gateways::mailer::{Mailer, MailerError, OutboundEmail};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Sends purchase notifications through the Resend API.
///
/// The HTTP client is shared and carries the service-wide bounded timeout;
/// a timed-out call surfaces as [`MailerError::TimedOut`] and is never
/// retried here.
pub struct ResendMailer {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

/// Error body shape returned by the Resend API.
#[derive(Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

impl ResendMailer {
    pub fn new(http: reqwest::Client, api_key: String, from: String, to: String) -> Self {
        Self {
            http,
            endpoint: RESEND_ENDPOINT.to_string(),
            api_key,
            from,
            to,
        }
    }

    /// Overrides the API endpoint; for tests against a local stub server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": [self.to],
                "subject": email.subject,
                "text": email.text,
            }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailerError::TimedOut
                } else {
                    MailerError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Purchase notification delivered");
            return Ok(());
        }

        let message = response
            .json::<ResendErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Email service returned {status}"));

        Err(MailerError::Rejected(message))
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
