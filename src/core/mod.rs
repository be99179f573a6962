pub mod cart;
pub mod catalog;
pub mod session;

pub use crate::domain::model::{Item, ItemRecord};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
