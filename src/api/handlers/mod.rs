//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod artists;
pub mod audio_proxy;
pub mod health;
pub mod purchase;
pub mod tracks;

pub use artists::artists_handler;
pub use audio_proxy::audio_proxy_handler;
pub use health::health_handler;
pub use purchase::purchase_handler;
pub use tracks::{list_tracks_handler, track_detail_handler};
