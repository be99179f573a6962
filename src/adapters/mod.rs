// Adapters layer: concrete implementations for external systems (catalog files).

pub mod catalog_file;

pub use catalog_file::{CatalogFormat, FileCatalogSource};
