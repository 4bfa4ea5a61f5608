//! Loaders for supplier price lists and pricing settings.

pub mod catalog;
pub mod settings;

pub use catalog::{Catalog, CatalogError};
pub use settings::SettingsError;
