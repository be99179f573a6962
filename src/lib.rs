pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::SessionConfig;

pub use adapters::FileCatalogSource;
pub use crate::core::{
    cart::Cart,
    catalog::Catalog,
    session::{Action, Session, SessionOutcome},
};
pub use domain::model::Item;
pub use utils::error::{Result, ShopError};
