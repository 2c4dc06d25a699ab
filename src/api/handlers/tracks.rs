//! Handlers for catalog browsing endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::tracks::{TrackDetailResponse, TrackListResponse, TrackQueryParams};
use crate::error::AppError;
use crate::state::AppState;

/// Lists one page of the catalog, optionally filtered by category.
///
/// # Endpoint
///
/// `GET /api/tracks?category=<name>&page=<n>&page_size=<n>`
///
/// # Behavior
///
/// - `category` omitted or `"All"` selects the whole catalog; anything else
///   is an exact match on the track's category field
/// - The page is clamped into range, so the endpoint never answers with an
///   out-of-range page
/// - `page_numbers` carries the at-most-two page buttons the store renders
///
/// # Errors
///
/// Returns 400 Bad Request for a zero page or an out-of-bounds page size.
pub async fn list_tracks_handler(
    State(state): State<AppState>,
    Query(params): Query<TrackQueryParams>,
) -> Result<Json<TrackListResponse>, AppError> {
    let (page, page_size) = params
        .validate_and_get_page()
        .map_err(AppError::bad_request)?;

    let result = state
        .catalog_service
        .page(params.category.as_deref(), page, page_size);

    Ok(Json(TrackListResponse {
        items: result.items,
        page: result.page,
        total_pages: result.total_pages,
        page_numbers: result.page_numbers,
        categories: result.categories,
    }))
}

/// Returns one track plus up to five related tracks in its category.
///
/// # Endpoint
///
/// `GET /api/tracks/{id}`
///
/// # Errors
///
/// Returns 404 Not Found (`Beat not found`) for an unknown id.
pub async fn track_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<TrackDetailResponse>, AppError> {
    let (track, related) = state.catalog_service.track_with_related(id)?;
    Ok(Json(TrackDetailResponse { track, related }))
}
