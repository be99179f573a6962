use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("No item matches '{query}'")]
    ItemNotFound { query: String },

    #[error("'{query}' matches more than one item: {}", .candidates.join(", "))]
    AmbiguousMatch {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Item '{name}' is already in the cart")]
    DuplicateItem { name: String },

    #[error("Unknown action: {verb}")]
    UnknownAction { verb: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed on {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ShopError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Cart,
    Command,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShopError::ValidationError { .. } | ShopError::YamlError(_) => ErrorCategory::Catalog,
            ShopError::SerializationError(_) => ErrorCategory::Catalog,
            ShopError::ItemNotFound { .. }
            | ShopError::AmbiguousMatch { .. }
            | ShopError::DuplicateItem { .. } => ErrorCategory::Cart,
            ShopError::UnknownAction { .. } => ErrorCategory::Command,
            ShopError::IoError(_) => ErrorCategory::Io,
            ShopError::ConfigError { .. }
            | ShopError::ConfigValidationError { .. }
            | ShopError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Cart | ErrorCategory::Command => ErrorSeverity::Low,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Catalog => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 使用者操作錯誤可以在同一個 session 中繼續
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShopError::ValidationError { .. } => {
                "Fix the catalog record so that price is a non-negative integer".to_string()
            }
            ShopError::ItemNotFound { .. } => {
                "Use search_by_name or search_by_hashtag to find available items".to_string()
            }
            ShopError::AmbiguousMatch { .. } => {
                "Type more of the item name so only one item matches".to_string()
            }
            ShopError::DuplicateItem { .. } => {
                "The item is already in your cart; continue shopping or checkout".to_string()
            }
            ShopError::UnknownAction { .. } => format!(
                "Valid actions: {}",
                crate::core::session::Action::ALL
                    .iter()
                    .map(|a| a.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ShopError::IoError(_) => {
                "Check that the catalog file exists and is readable".to_string()
            }
            ShopError::YamlError(_) | ShopError::SerializationError(_) => {
                "Check the catalog file format: a top-level 'items' list is required".to_string()
            }
            ShopError::ConfigError { .. } | ShopError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            ShopError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::ItemNotFound { query } => format!("Could not find an item matching '{}'.", query),
            ShopError::AmbiguousMatch { query, candidates } => format!(
                "'{}' matches {} items ({}). Please be more specific.",
                query,
                candidates.len(),
                candidates.join(", ")
            ),
            ShopError::DuplicateItem { name } => format!("'{}' is already in your cart.", name),
            ShopError::UnknownAction { .. } => "No such action...".to_string(),
            ShopError::ValidationError { field, message } => {
                format!("Invalid catalog entry ({}): {}", field, message)
            }
            ShopError::IoError(e) => format!("Could not read a file: {}", e),
            other => other.to_string(),
        }
    }
}
