use crate::domain::model::{CatalogFile, ItemRecord};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, ShopError};
use std::fs;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yml") | Some("yaml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(ShopError::InvalidConfigValueError {
                field: "catalog.path".to_string(),
                value: path.display().to_string(),
                reason: format!(
                    "Unsupported catalog format. Supported extensions: {}",
                    SUPPORTED_EXTENSIONS.join(", ")
                ),
            }),
        }
    }

    pub fn parse(&self, content: &str) -> Result<Vec<ItemRecord>> {
        let file: CatalogFile = match self {
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
            CatalogFormat::Json => serde_json::from_str(content)?,
        };
        Ok(file.items)
    }
}

/// Reads the catalog from a YAML or JSON file on local disk.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<Vec<ItemRecord>> {
        let format = CatalogFormat::from_path(&self.path)?;
        tracing::info!("📁 Loading catalog from: {}", self.path.display());

        let content = fs::read_to_string(&self.path)?;
        let records = format.parse(&content)?;

        tracing::debug!("Read {} catalog records ({:?})", records.len(), format);
        Ok(records)
    }
}
