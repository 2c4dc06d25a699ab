//! Handler for the artist roster endpoint.

use axum::Json;

use crate::domain::artists::{self, Artist};

/// Returns the studio's artist roster.
///
/// # Endpoint
///
/// `GET /api/artists`
pub async fn artists_handler() -> Json<&'static [Artist]> {
    Json(artists::roster())
}
