use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchasable catalog entry. Immutable once built; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    price: u64,
    tags: Vec<String>,
    description: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        price: u64,
        tags: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            tags,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)?;
        if !self.tags.is_empty() {
            let tags = self
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " [{}]", tags)?;
        }
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}

/// Price as it appears in a catalog file, before coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PriceValue {
    pub fn to_price(&self) -> std::result::Result<u64, String> {
        match self {
            PriceValue::Integer(n) => {
                u64::try_from(*n).map_err(|_| format!("price must not be negative, got {}", n))
            }
            PriceValue::Float(x) => {
                if !x.is_finite() || x.fract() != 0.0 {
                    Err(format!("price must be a whole number, got {}", x))
                } else if *x < 0.0 {
                    Err(format!("price must not be negative, got {}", x))
                } else if *x >= u64::MAX as f64 {
                    Err(format!("price is too large: {}", x))
                } else {
                    Ok(*x as u64)
                }
            }
            PriceValue::Text(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<i64>() {
                    Ok(n) if n < 0 => Err(format!("price must not be negative, got '{}'", s)),
                    Ok(n) => Ok(n as u64),
                    Err(_) => trimmed
                        .parse::<u64>()
                        .map_err(|_| format!("price is not an integer: '{}'", s)),
                }
            }
        }
    }
}

/// Raw record handed over by a catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub price: PriceValue,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ShopError;

    fn try_from(record: ItemRecord) -> Result<Self> {
        let price = record
            .price
            .to_price()
            .map_err(|message| ShopError::ValidationError {
                field: format!("{}.price", record.name),
                message,
            })?;

        Ok(Item::new(record.name, price, record.hashtags, record.description))
    }
}

/// On-disk catalog document: a top-level `items` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<ItemRecord>,
}
