//! Catalog filtering and pagination.
//!
//! Shared between the API's track listing endpoint and the interactive
//! storefront CLI. Page navigation is clamped: out-of-range pages are never
//! reachable through the exposed contract.

use std::sync::Arc;

use crate::domain::catalog::{Catalog, Track};

/// Default number of tracks per page, matching the store grid.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Category value selecting the entire catalog.
pub const ALL_CATEGORIES: &str = "All";

/// Returns the 1-based slice `[(page-1)*size, page*size)` of `items`.
///
/// A page beyond the end yields an empty slice; callers are expected to keep
/// `page` in range via [`total_pages`].
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let start = (page.saturating_sub(1)) * page_size;
    let end = (start + page_size).min(items.len());
    if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    }
}

/// Number of pages needed for `len` items; at least 1 so an empty result
/// still has a current page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Page buttons to display: at most two at a time.
///
/// {1, 2} on the first page, the last two pages on the last page, otherwise
/// the current page and its immediate predecessor. The UI never renders the
/// full page range.
pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= 2 {
        (1..=total_pages).collect()
    } else if page == 1 {
        vec![1, 2]
    } else if page == total_pages {
        vec![total_pages - 1, total_pages]
    } else {
        vec![page - 1, page]
    }
}

/// Stateful catalog view: one active category and one current page.
pub struct CatalogBrowser {
    catalog: Arc<Catalog>,
    category: String,
    page: usize,
    page_size: usize,
}

impl CatalogBrowser {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_page_size(catalog, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: Arc<Catalog>, page_size: usize) -> Self {
        Self {
            catalog,
            category: ALL_CATEGORIES.to_string(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Switches the active category and resets the page to 1.
    ///
    /// `"All"` selects the whole catalog; anything else is an exact match on
    /// the track's category field.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    /// Tracks matching the active category, unpaginated.
    pub fn filtered(&self) -> Vec<&Track> {
        self.catalog
            .tracks()
            .iter()
            .filter(|t| self.category == ALL_CATEGORIES || t.category == self.category)
            .collect()
    }

    /// Tracks on the current page.
    pub fn page_items(&self) -> Vec<&Track> {
        let filtered = self.filtered();
        paginate(&filtered, self.page_size, self.page).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    /// Advances one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    /// Goes back one page; no-op on page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// The two-button page window for the current position.
    pub fn page_numbers(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages())
    }
}
