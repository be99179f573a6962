use crate::domain::model::ItemRecord;
use crate::utils::error::Result;

/// Supplies the raw catalog records at startup.
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<ItemRecord>>;
}

pub trait ConfigProvider {
    fn catalog_path(&self) -> &str;
    fn prompt(&self) -> &str;
    fn verbose(&self) -> bool;
}
