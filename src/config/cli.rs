use super::toml_config::ShopConfig;
use super::SessionConfig;
use crate::core::session::DEFAULT_PROMPT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_PATH: &str = "items.yml";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-shop")]
#[command(about = "A small interactive shopping cart over a catalog file")]
pub struct CliConfig {
    /// Catalog file (.yml, .yaml or .json) [default: items.yml]
    #[arg(long)]
    pub catalog: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the interactive prompt
    #[arg(long)]
    pub prompt: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Load and validate the catalog, then exit without starting a session
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with the command line; flags win.
    pub fn resolve(&self) -> Result<SessionConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = ShopConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let catalog_path = self
            .catalog
            .clone()
            .or_else(|| file.as_ref().map(|f| f.catalog_path().to_string()))
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        let prompt = self
            .prompt
            .clone()
            .or_else(|| file.as_ref().map(|f| f.prompt().to_string()))
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        let verbose = self.verbose || file.as_ref().map(|f| f.verbose()).unwrap_or(false);
        let log_level = file
            .as_ref()
            .and_then(|f| f.log_level())
            .map(|level| level.to_ascii_lowercase());

        Ok(SessionConfig {
            catalog_path,
            prompt,
            verbose,
            log_level,
            dry_run: self.dry_run,
        })
    }
}
