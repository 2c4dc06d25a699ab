//! No-op mailer implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::gateways::mailer::{Mailer, MailerError, OutboundEmail};

/// A mailer that delivers nothing.
///
/// Every send succeeds immediately without contacting any service.
///
/// # Use Cases
///
/// - Integration tests exercising handlers without outbound traffic
/// - Local development without Resend credentials
pub struct NullMailer;

impl NullMailer {
    pub fn new() -> Self {
        debug!("Using NullMailer (delivery disabled)");
        Self
    }
}

impl Default for NullMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), MailerError> {
        Ok(())
    }
}
