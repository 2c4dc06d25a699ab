//! DTOs for the track listing and detail endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::browser::DEFAULT_PAGE_SIZE;
use crate::domain::catalog::Track;

/// Largest page a client may request: eight rows of the store grid.
const MAX_PAGE_SIZE: u32 = 48;

/// Query parameters for `GET /api/tracks`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct TrackQueryParams {
    pub category: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl TrackQueryParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 6 (the store grid)
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 48
    ///
    /// # Returns
    ///
    /// `(page, page_size)` for the catalog service.
    pub fn validate_and_get_page(&self) -> Result<(usize, usize), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE as u32);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(format!("Page size must be between 1 and {MAX_PAGE_SIZE}"));
        }

        Ok((page as usize, page_size as usize))
    }
}

/// One page of the store grid.
#[derive(Debug, Serialize)]
pub struct TrackListResponse {
    pub items: Vec<Track>,
    pub page: usize,
    pub total_pages: usize,
    /// The at-most-two page buttons the store UI renders.
    pub page_numbers: Vec<usize>,
    pub categories: Vec<String>,
}

/// Response for `GET /api/tracks/{id}`.
#[derive(Debug, Serialize)]
pub struct TrackDetailResponse {
    pub track: Track,
    pub related: Vec<Track>,
}
