use small_shop::{Catalog, FileCatalogSource, Session, SessionOutcome};
use std::io::Cursor;
use tempfile::TempDir;

const ITEMS_YAML: &str = r#"
items:
  - name: Red Shirt
    price: 80
    hashtags: [tops, cotton]
    description: Short sleeve
  - name: Blue Shirt
    price: 85
    hashtags: [tops, linen]
    description: Long sleeve
  - name: Cotton Socks
    price: 12
    hashtags: [cotton, feet]
    description: Three pairs
  - name: Straw Hat
    price: 45
    hashtags: [summer]
    description: Wide brim
"#;

fn load_catalog(temp_dir: &TempDir) -> Catalog {
    let path = temp_dir.path().join("items.yml");
    std::fs::write(&path, ITEMS_YAML).unwrap();
    Catalog::load(&FileCatalogSource::new(path)).unwrap()
}

fn run(script: &str) -> (SessionOutcome, String, Catalog) {
    let temp_dir = TempDir::new().unwrap();
    let catalog = load_catalog(&temp_dir);

    let mut session = Session::new(catalog, Cursor::new(script.as_bytes().to_vec()), Vec::new())
        .with_prompt("");
    let outcome = session.run().unwrap();
    let (catalog, output) = session.into_parts();
    (outcome, String::from_utf8(output).unwrap(), catalog)
}

#[test]
fn test_full_shopping_session() {
    let script = "\
search_by_name Shirt
add_item Red
search_by_hashtag cotton
add_item Socks
checkout
";
    let (outcome, output, catalog) = run(script);

    assert_eq!(outcome, SessionOutcome::CheckedOut { total: 92 });

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "Blue Shirt - 85 [#tops #linen] Long sleeve",
            "Red Shirt - 80 [#tops #cotton] Short sleeve",
            "Added 'Red Shirt' to the cart.",
            "Cotton Socks - 12 [#cotton #feet] Three pairs",
            "Added 'Cotton Socks' to the cart.",
            "The total of the purchase is 92.",
            "Thank you for shopping with us!",
        ]
    );

    // checkout reports the total without emptying the cart
    assert_eq!(catalog.cart().len(), 2);
    assert_eq!(catalog.checkout(), 92);
}

#[test]
fn test_cart_overlap_reorders_name_search() {
    let script = "add_item Socks\nsearch_by_name Shirt\nexit\n";
    let (outcome, output, _) = run(script);

    assert_eq!(outcome, SessionOutcome::Exited);
    let red = output.find("Red Shirt").unwrap();
    let blue = output.find("Blue Shirt").unwrap();
    assert!(red < blue, "cotton overlap should rank Red Shirt first:\n{output}");
}

#[test]
fn test_failed_commands_do_not_change_state() {
    let script = "\
add_item Shirt
add_item Hat
add_item Hat
remove_item Socks
remove_item Nothing
purchase everything
remove_item Hat
checkout
";
    let (outcome, output, catalog) = run(script);

    assert!(output.contains("Error: 'Shirt' matches 2 items (Red Shirt, Blue Shirt). Please be more specific."));
    assert!(output.contains("Error: 'Straw Hat' is already in your cart."));
    assert!(output.contains("Error: Could not find an item matching 'Cotton Socks'."));
    assert!(output.contains("Error: Could not find an item matching 'Nothing'."));
    assert!(output.contains("No such action..."));
    assert!(output.contains("Removed 'Straw Hat' from the cart."));

    assert_eq!(outcome, SessionOutcome::CheckedOut { total: 0 });
    assert!(catalog.cart().is_empty());
}

#[test]
fn test_argument_is_passed_verbatim() {
    // the trailing space is part of the query, so nothing matches
    let (_, output, catalog) = run("add_item Hat \nexit\n");
    assert!(output.contains("Error: Could not find an item matching 'Hat '."));
    assert!(catalog.cart().is_empty());
}

#[test]
fn test_exit_without_checkout() {
    let (outcome, output, catalog) = run("add_item Straw\nexit\nadd_item Red\n");
    assert_eq!(outcome, SessionOutcome::Exited);
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(catalog.cart().len(), 1);
}
