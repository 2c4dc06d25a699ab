//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    artists_handler, audio_proxy_handler, list_tracks_handler, purchase_handler,
    track_detail_handler,
};
use crate::state::AppState;

/// All storefront API routes.
///
/// # Endpoints
///
/// - `GET  /tracks`       - One page of the catalog (category filter + pagination)
/// - `GET  /tracks/{id}`  - Track detail with related tracks
/// - `GET  /artists`      - Studio artist roster
/// - `GET  /audio-proxy`  - Streaming relay for Drive-hosted previews
/// - `POST /purchase`     - Purchase notification
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tracks", get(list_tracks_handler))
        .route("/tracks/{id}", get(track_detail_handler))
        .route("/artists", get(artists_handler))
        .route("/audio-proxy", get(audio_proxy_handler))
        .route("/purchase", post(purchase_handler))
}
