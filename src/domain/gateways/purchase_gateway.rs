//! Purchase submission contract, as seen from a storefront client.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::checkout::PurchaseSubmission;

#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The purchase endpoint answered with an error; carries its message.
    #[error("{0}")]
    Rejected(String),

    /// The submission exceeded its bounded timeout. The flow surfaces this
    /// as a retry-eligible error, never retries on its own.
    #[error("request timed out")]
    TimedOut,

    /// The endpoint was unreachable.
    #[error("{0}")]
    Transport(String),
}

/// Delivers a purchase submission to the notifier endpoint.
#[async_trait]
pub trait PurchaseGateway: Send + Sync {
    async fn submit(&self, submission: &PurchaseSubmission) -> Result<(), PurchaseError>;
}
