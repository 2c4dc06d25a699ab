//! Domain layer containing business entities and logic.
//!
//! This module implements the storefront's core model independent of HTTP
//! and of any concrete external service.
//!
//! # Architecture
//!
//! - [`catalog`] - Track entities and the immutable in-memory catalog
//! - [`cart`] - Observable session cart (one writer, many readers)
//! - [`browser`] - Category filtering and clamped pagination
//! - [`player`] - Preview playback model with the 30-second cap
//! - [`checkout`] - Purchase flow state machine
//! - [`artists`] - Static roster content
//! - [`gateways`] - Traits for external collaborators
//!
//! # Design Principles
//!
//! - Domain modules have no dependencies on infrastructure or API layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Cart, browser, player, and checkout run client-side with
//!   single-threaded, synchronous semantics; server handlers are stateless

pub mod artists;
pub mod browser;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod gateways;
pub mod player;
