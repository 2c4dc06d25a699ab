//! Catalog querying for the track listing and detail endpoints.

use std::sync::Arc;

use crate::domain::browser::{page_window, paginate, total_pages, ALL_CATEGORIES};
use crate::domain::catalog::{Catalog, Track};
use crate::error::AppError;

/// How many related tracks the detail endpoint returns at most.
const RELATED_LIMIT: usize = 5;

/// One page of the (optionally filtered) catalog, ready for display.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub items: Vec<Track>,
    pub page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub categories: Vec<String>,
}

/// Read-only queries over the immutable catalog.
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Filters by category and paginates.
    ///
    /// `None` or `"All"` selects the whole catalog; any other category is an
    /// exact match. The requested page is clamped into `[1, total_pages]` so
    /// the endpoint never answers with an out-of-range page.
    pub fn page(&self, category: Option<&str>, page: usize, page_size: usize) -> CatalogPage {
        let category = category.unwrap_or(ALL_CATEGORIES);
        let filtered: Vec<&Track> = self
            .catalog
            .tracks()
            .iter()
            .filter(|t| category == ALL_CATEGORIES || t.category == category)
            .collect();

        let total_pages = total_pages(filtered.len(), page_size);
        let page = page.clamp(1, total_pages);
        let items = paginate(&filtered, page_size, page)
            .iter()
            .map(|t| (*t).clone())
            .collect();

        CatalogPage {
            items,
            page,
            total_pages,
            page_numbers: page_window(page, total_pages),
            categories: self.catalog.categories(),
        }
    }

    /// Looks up one track and up to five related tracks in its category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no track has the given id.
    pub fn track_with_related(&self, id: u32) -> Result<(Track, Vec<Track>), AppError> {
        let track = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Beat not found"))?;

        let related = self
            .catalog
            .related(id, RELATED_LIMIT)
            .into_iter()
            .cloned()
            .collect();

        Ok((track, related))
    }
}
