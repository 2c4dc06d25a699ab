//! Transactional email contract.

use async_trait::async_trait;
use thiserror::Error;

/// One outbound notification email. Sender and recipient addresses are the
/// mailer's own configuration, not part of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub subject: String,
    pub text: String,
}

/// Delivery failures, kept coarse on purpose: the caller only decides between
/// surfacing the collaborator's message, a timeout, or a generic fault.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The email service accepted the request but refused delivery; carries
    /// the service's own message text.
    #[error("{0}")]
    Rejected(String),

    /// The outbound call exceeded its bounded timeout. Never retried
    /// automatically.
    #[error("Email service timed out")]
    TimedOut,

    /// Network or protocol fault before the service could answer.
    #[error("{0}")]
    Transport(String),
}

/// Sends purchase notifications through a transactional email service.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;

    /// Whether the mailer has credentials to deliver anything; used by the
    /// health endpoint.
    fn is_configured(&self) -> bool {
        true
    }
}
