#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// Effective settings for one run, after merging the config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub catalog_path: String,
    pub prompt: String,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub dry_run: bool,
}

impl ConfigProvider for SessionConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("catalog.path", &self.catalog_path)?;
        validation::validate_file_extension(
            "catalog.path",
            &self.catalog_path,
            &crate::adapters::catalog_file::SUPPORTED_EXTENSIONS,
        )?;
        validation::validate_single_line("session.prompt", &self.prompt)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
