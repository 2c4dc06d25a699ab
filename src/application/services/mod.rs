//! Business logic services.

pub mod catalog_service;
pub mod purchase_service;
pub mod relay_service;

pub use catalog_service::{CatalogPage, CatalogService};
pub use purchase_service::PurchaseService;
pub use relay_service::RelayService;
