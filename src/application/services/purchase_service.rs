//! Purchase notification processing.
//!
//! Validates the submission, renders the line-item summary, and delivers it
//! through the configured [`Mailer`]. Performs no retry and no persistence;
//! a failed notification is simply reported to the caller.

use std::sync::Arc;

use tracing::error;

use crate::domain::catalog::Track;
use crate::domain::gateways::mailer::{Mailer, MailerError, OutboundEmail};
use crate::error::AppError;

const SUBJECT: &str = "New Beat Purchase";

pub struct PurchaseService {
    mailer: Arc<dyn Mailer>,
}

impl PurchaseService {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Whether the mailer has credentials; used by the health endpoint.
    pub fn mailer_configured(&self) -> bool {
        self.mailer.is_configured()
    }

    /// Validates and delivers one purchase notification.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] (`Missing required fields`) when the name
    ///   or email is empty or no beats were submitted; the mailer is never
    ///   called in this case.
    /// - [`AppError::Timeout`] when the email service does not answer within
    ///   the bounded timeout.
    /// - [`AppError::Internal`] with the service's message on delivery
    ///   rejection, or `Something went wrong` on any other fault.
    pub async fn process(&self, name: &str, email: &str, beats: &[Track]) -> Result<(), AppError> {
        if name.trim().is_empty() || email.trim().is_empty() || beats.is_empty() {
            return Err(AppError::bad_request("Missing required fields"));
        }

        let message = OutboundEmail {
            subject: SUBJECT.to_string(),
            text: notification_text(name, email, beats),
        };

        self.mailer.send(&message).await.map_err(|e| match e {
            MailerError::Rejected(msg) => {
                error!("Email service rejected purchase notification: {msg}");
                AppError::internal(msg)
            }
            MailerError::TimedOut => {
                error!("Email service timed out");
                AppError::timeout("Email service timed out")
            }
            MailerError::Transport(msg) => {
                error!("Failed to reach email service: {msg}");
                AppError::internal("Something went wrong")
            }
        })
    }
}

/// Human-readable line-item summary, one `"{title} - Price: ₹{price}"` per
/// beat.
pub fn line_items(beats: &[Track]) -> String {
    beats
        .iter()
        .map(|beat| format!("{} - Price: ₹{}", beat.title, beat.price))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sum of the submitted beats' prices.
pub fn order_total(beats: &[Track]) -> u64 {
    beats.iter().map(|beat| u64::from(beat.price)).sum()
}

fn notification_text(name: &str, email: &str, beats: &[Track]) -> String {
    format!(
        "New purchase:\n\n{}\n\nTotal Price: ₹{}\n\nBuyer: {} <{}>",
        line_items(beats),
        order_total(beats),
        name,
        email
    )
}
