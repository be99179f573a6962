use small_shop::domain::ports::CatalogSource;
use small_shop::{Catalog, FileCatalogSource, ShopError};
use std::fs;
use tempfile::TempDir;

const ITEMS_YAML: &str = r#"
items:
  - name: Straw Hat
    price: 10
    hashtags: [summer, sun]
    description: Wide brim straw hat
  - name: Wool Scarf
    price: "15"
    hashtags: [winter]
    description: Hand-knitted scarf
  - name: Sunglasses
    price: 30
    hashtags: [summer, sun, eyes]
    description: Polarized lenses
"#;

#[test]
fn test_load_yaml_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("items.yml");
    fs::write(&path, ITEMS_YAML)?;

    let catalog = Catalog::load(&FileCatalogSource::new(&path))?;

    assert_eq!(catalog.items().len(), 3);
    assert_eq!(catalog.items()[1].name(), "Wool Scarf");
    assert_eq!(catalog.items()[1].price(), 15);
    assert_eq!(catalog.items()[2].tags(), ["summer", "sun", "eyes"]);
    assert!(catalog.cart().is_empty());
    Ok(())
}

#[test]
fn test_load_json_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("items.json");
    let json = serde_json::json!({
        "items": [
            {"name": "A", "price": 10, "hashtags": ["x"], "description": "first"},
            {"name": "B", "price": "5", "hashtags": ["x", "y"], "description": "second"}
        ]
    });
    fs::write(&path, serde_json::to_string_pretty(&json)?)?;

    let records = FileCatalogSource::new(&path).load()?;
    assert_eq!(records.len(), 2);

    let catalog = Catalog::from_records(records)?;
    let total: u64 = catalog.items().iter().map(|i| i.price()).sum();
    assert_eq!(total, 15);
    Ok(())
}

#[test]
fn test_unparseable_price_is_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.yaml");
    fs::write(
        &path,
        "items:\n  - name: Hat\n    price: ten\n    hashtags: []\n    description: ''\n",
    )
    .unwrap();

    let err = Catalog::load(&FileCatalogSource::new(&path)).unwrap_err();
    assert!(matches!(err, ShopError::ValidationError { .. }), "got {err:?}");
    assert!(!err.is_recoverable());
}

#[test]
fn test_negative_price_is_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.yml");
    fs::write(
        &path,
        "items:\n  - name: Hat\n    price: -3\n    hashtags: [x]\n    description: d\n",
    )
    .unwrap();

    let err = Catalog::load(&FileCatalogSource::new(&path)).unwrap_err();
    assert!(err.to_string().contains("negative"));
}

#[test]
fn test_missing_and_unsupported_files() {
    let temp_dir = TempDir::new().unwrap();

    let missing = FileCatalogSource::new(temp_dir.path().join("missing.yml"));
    assert!(matches!(Catalog::load(&missing), Err(ShopError::IoError(_))));

    let csv_path = temp_dir.path().join("items.csv");
    fs::write(&csv_path, "name,price\nHat,10\n").unwrap();
    let unsupported = FileCatalogSource::new(&csv_path);
    assert!(matches!(
        Catalog::load(&unsupported),
        Err(ShopError::InvalidConfigValueError { .. })
    ));
}

#[test]
fn test_malformed_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.yml");
    fs::write(&path, "items: [unclosed").unwrap();

    assert!(matches!(
        Catalog::load(&FileCatalogSource::new(&path)),
        Err(ShopError::YamlError(_))
    ));
}

#[test]
fn test_demo_catalog_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/items.yml");
    let catalog = Catalog::load(&FileCatalogSource::new(path)).unwrap();
    assert!(!catalog.items().is_empty());
}
