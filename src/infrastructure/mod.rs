//! Infrastructure layer: concrete gateway implementations.
//!
//! - [`email`] - Resend transactional mailer (and a no-op stand-in)
//! - [`audio`] - Google Drive audio source
//! - [`purchase`] - HTTP purchase gateway used by storefront clients

pub mod audio;
pub mod email;
pub mod purchase;
