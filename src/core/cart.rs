use crate::domain::model::Item;
use crate::utils::error::{Result, ShopError};
use std::collections::HashMap;

/// Ordered, duplicate-free selection of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<Item>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`. Fails without touching the cart when an equal item is present.
    pub fn add(&mut self, item: Item) -> Result<()> {
        if self.contains(&item) {
            return Err(ShopError::DuplicateItem {
                name: item.name().to_string(),
            });
        }
        tracing::debug!("Cart: adding '{}'", item.name());
        self.entries.push(item);
        Ok(())
    }

    /// Removes the first entry whose name is exactly `name`.
    pub fn remove(&mut self, name: &str) -> Result<Item> {
        let index = self
            .entries
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| ShopError::ItemNotFound {
                query: name.to_string(),
            })?;
        Ok(self.entries.remove(index))
    }

    /// Removes the entry equal to `item`.
    pub fn remove_item(&mut self, item: &Item) -> Result<Item> {
        let index = self
            .entries
            .iter()
            .position(|i| i == item)
            .ok_or_else(|| ShopError::ItemNotFound {
                query: item.name().to_string(),
            })?;
        Ok(self.entries.remove(index))
    }

    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn subtotal(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.price()))
    }

    pub fn items(&self) -> &[Item] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.entries.contains(item)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|i| i.name() == name)
    }

    /// Multiset of every tag across all entries.
    pub fn tag_occurrences(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for tag in self.entries.iter().flat_map(|i| i.tags()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
