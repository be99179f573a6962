use crate::core::cart::Cart;
use crate::domain::model::{Item, ItemRecord};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, ShopError};

/// The static item list for a session plus the session's single cart.
///
/// Items never change after construction; the cart is only reachable
/// mutably through the operations here, so every cart entry was resolved
/// against `items` first.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    cart: Cart,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            cart: Cart::new(),
        }
    }

    /// Builds a catalog from raw records, failing on the first invalid one.
    pub fn from_records(records: Vec<ItemRecord>) -> Result<Self> {
        let items = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Item::try_from(record).map_err(|e| match e {
                    ShopError::ValidationError { field, message } => ShopError::ValidationError {
                        field: format!("items[{}] {}", index, field),
                        message,
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Catalog built with {} items", items.len());
        Ok(Self::new(items))
    }

    pub fn load<S: CatalogSource>(source: &S) -> Result<Self> {
        Self::from_records(source.load()?)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum, over the candidate's tags, of how often each tag occurs across the cart.
    pub fn overlap_count(&self, item: &Item) -> usize {
        let occurrences = self.cart.tag_occurrences();
        item.tags()
            .iter()
            .map(|tag| occurrences.get(tag.as_str()).copied().unwrap_or(0))
            .sum()
    }

    pub fn search_by_name(&self, query: &str) -> Vec<Item> {
        self.rank(|item| item.name().contains(query))
    }

    pub fn search_by_hashtag(&self, tag: &str) -> Vec<Item> {
        self.rank(|item| item.has_tag(tag))
    }

    /// Name order first, then a stable pass by descending overlap so ties keep name order.
    fn rank<F>(&self, matches: F) -> Vec<Item>
    where
        F: Fn(&Item) -> bool,
    {
        let mut candidates: Vec<&Item> = self.items.iter().filter(|i| matches(*i)).collect();
        candidates.sort_by(|a, b| a.name().cmp(b.name()));

        let mut scored: Vec<(usize, &Item)> = candidates
            .into_iter()
            .map(|item| (self.overlap_count(item), item))
            .collect();
        scored.sort_by(|(a, _), (b, _)| b.cmp(a));

        scored
            .into_iter()
            .map(|(_, item)| item)
            .filter(|item| !self.cart.contains(item))
            .cloned()
            .collect()
    }

    /// Resolves a partial name to exactly one catalog item.
    fn resolve(&self, query: &str) -> Result<&Item> {
        let candidates: Vec<&Item> = self
            .items
            .iter()
            .filter(|i| i.name().contains(query))
            .collect();

        match candidates.as_slice() {
            [] => Err(ShopError::ItemNotFound {
                query: query.to_string(),
            }),
            [item] => Ok(*item),
            many => Err(ShopError::AmbiguousMatch {
                query: query.to_string(),
                candidates: many.iter().map(|i| i.name().to_string()).collect(),
            }),
        }
    }

    pub fn add_item(&mut self, query: &str) -> Result<Item> {
        let item = self.resolve(query)?.clone();
        if self.cart.contains_name(item.name()) {
            return Err(ShopError::DuplicateItem {
                name: item.name().to_string(),
            });
        }

        tracing::debug!("Resolved '{}' to '{}' for add", query, item.name());
        self.cart.add(item.clone())?;
        Ok(item)
    }

    pub fn remove_item(&mut self, query: &str) -> Result<Item> {
        let item = self.resolve(query)?.clone();
        tracing::debug!("Resolved '{}' to '{}' for removal", query, item.name());
        self.cart.remove_item(&item)
    }

    /// Cart total. The cart is left as is.
    pub fn checkout(&self) -> u64 {
        self.cart.subtotal()
    }
}
