use super::*;

// =============================================================
// Embedded dataset
// =============================================================

#[test]
fn embedded_catalog_parses() {
    assert!(Catalog::parse(CATALOG_JSON).is_ok());
}

#[test]
fn embedded_catalog_has_expected_sections() {
    let catalog = Catalog::load();
    assert_eq!(catalog.categories.len(), 4);
    assert_eq!(catalog.products.len(), 8);
    assert_eq!(catalog.features.len(), 6);
}

#[test]
fn embedded_products_have_unique_ids() {
    let catalog = Catalog::load();
    let mut ids: Vec<u32> = catalog.products.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.products.len());
}

#[test]
fn embedded_products_are_complete() {
    for product in Catalog::load().products {
        assert!(!product.name.is_empty());
        assert!(product.price.starts_with('$'), "{}", product.price);
        assert!(product.image.starts_with("https://"));
        assert!(product.photographer_url.starts_with("https://"));
    }
}

#[test]
fn embedded_first_category_is_desk_lamps() {
    let catalog = Catalog::load();
    assert_eq!(catalog.categories[0].name, "Desk Lamps");
}

// =============================================================
// Defaults and fallback
// =============================================================

#[test]
fn missing_fields_default_to_empty() {
    let catalog = Catalog::parse(r#"{"products":[{"id":9,"name":"Bare"}]}"#).unwrap();
    let product = &catalog.products[0];
    assert_eq!(product.id, 9);
    assert_eq!(product.price, "");
    assert!(catalog.categories.is_empty());
    assert!(catalog.features.is_empty());
}

#[test]
fn malformed_document_is_an_error() {
    assert!(Catalog::parse("{not json").is_err());
}

#[test]
fn malformed_document_falls_back_to_empty() {
    let catalog = Catalog::parse_or_empty("[1, 2, 3]");
    assert!(catalog.is_empty());
}

#[test]
fn empty_object_is_empty_catalog() {
    assert!(Catalog::parse_or_empty("{}").is_empty());
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn alt_text_joins_name_and_attribution() {
    let product = LampProduct {
        name: "Sphere Pendant".into(),
        attribution: "Marta Dzedyshko on Pexels".into(),
        ..LampProduct::default()
    };
    assert_eq!(product.alt_text(), "Sphere Pendant - Marta Dzedyshko on Pexels");
}

#[test]
fn alt_text_without_any_text_is_placeholder() {
    assert_eq!(LampProduct::default().alt_text(), PLACEHOLDER);
}

#[test]
fn or_placeholder_replaces_blank_values() {
    assert_eq!(or_placeholder(""), PLACEHOLDER);
    assert_eq!(or_placeholder("   "), PLACEHOLDER);
    assert_eq!(or_placeholder("$9.99"), "$9.99");
}

#[test]
fn photo_credits_are_deduplicated_in_order() {
    let credits = Catalog::load().photo_credits();
    let brett = credits.iter().filter(|(name, _)| name == "Brett Sayles on Pexels").count();
    assert_eq!(brett, 1);
    assert_eq!(credits[0].0, "CHUTTERSNAP on Unsplash");
    assert_eq!(credits.len(), 7);
}
