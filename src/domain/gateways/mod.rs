//! Contracts for external collaborators.
//!
//! These traits are the domain's view of the outside world: a transactional
//! email service, the third-party audio host, and the purchase endpoint as
//! seen from a storefront client. Implementations live in
//! [`crate::infrastructure`]; tests substitute mocks or null objects.

pub mod audio_source;
pub mod mailer;
pub mod purchase_gateway;

pub use audio_source::{AudioFetchError, AudioPayload, AudioSource};
pub use mailer::{Mailer, MailerError, OutboundEmail};
pub use purchase_gateway::{PurchaseError, PurchaseGateway};
