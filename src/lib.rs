//! # SoundForge
//!
//! Promotional site backend and beat storefront for the SoundForge studio,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Catalog, cart, preview player, checkout
//!   flow, and the gateway traits they depend on
//! - **Application Layer** ([`application`]) - Services orchestrating catalog
//!   queries, purchase notifications, and audio relaying
//! - **Infrastructure Layer** ([`infrastructure`]) - Resend mailer, Google
//!   Drive audio source, and the HTTP purchase gateway
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and route composition
//!
//! ## Features
//!
//! - Static in-memory beat catalog with category filtering and pagination
//! - Observable cart store with a single-writer, many-readers contract
//! - 30-second preview playback model with circular playlist navigation
//! - Checkout flow state machine driving an outbound purchase notification
//! - Streaming audio relay around Google Drive's direct-link restrictions
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export RESEND_API_KEY="re_..."
//! export RESEND_FROM_EMAIL="store@soundforge.studio"
//! export RESEND_TO_EMAIL="orders@soundforge.studio"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CatalogService, PurchaseService, RelayService};
    pub use crate::domain::cart::CartStore;
    pub use crate::domain::catalog::{Catalog, Track};
    pub use crate::domain::checkout::{CheckoutFlow, CheckoutState, PurchaseSubmission};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
