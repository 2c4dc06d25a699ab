//! Transactional email delivery.

pub mod null;
pub mod resend;

pub use null::NullMailer;
pub use resend::ResendMailer;
