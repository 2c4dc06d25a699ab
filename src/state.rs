//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{CatalogService, PurchaseService, RelayService};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub purchase_service: Arc<PurchaseService>,
    pub relay_service: Arc<RelayService>,
}

impl AppState {
    pub fn new(
        catalog_service: Arc<CatalogService>,
        purchase_service: Arc<PurchaseService>,
        relay_service: Arc<RelayService>,
    ) -> Self {
        Self {
            catalog_service,
            purchase_service,
            relay_service,
        }
    }
}
