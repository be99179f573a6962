use crate::core::session::DEFAULT_PROMPT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    pub catalog: CatalogConfig,
    pub session: Option<SessionSection>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSection {
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ShopConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShopError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShopError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShopError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_path("catalog.path", &self.catalog.path)?;
        crate::utils::validation::validate_file_extension(
            "catalog.path",
            &self.catalog.path,
            &crate::adapters::catalog_file::SUPPORTED_EXTENSIONS,
        )?;

        if let Some(prompt) = self.session.as_ref().and_then(|s| s.prompt.as_deref()) {
            crate::utils::validation::validate_single_line("session.prompt", prompt)?;
        }

        if let Some(level) = self.log_level() {
            crate::utils::validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// debug 或 trace 等同於 --verbose
    pub fn is_verbose(&self) -> bool {
        self.log_level()
            .map(|l| matches!(l.to_ascii_lowercase().as_str(), "debug" | "trace"))
            .unwrap_or(false)
    }
}

impl ConfigProvider for ShopConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog.path
    }

    fn prompt(&self) -> &str {
        self.session
            .as_ref()
            .and_then(|s| s.prompt.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
    }

    fn verbose(&self) -> bool {
        self.is_verbose()
    }
}

impl Validate for ShopConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
