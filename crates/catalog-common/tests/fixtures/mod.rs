use catalog_common::types::{CatalogItem, ItemId};

/// Build a catalog item with the fields the pipeline reads.
#[allow(dead_code)]
pub fn item(id: u64, name: &str, brand: &str, created_at: i64) -> CatalogItem {
    CatalogItem {
        id: ItemId::Numeric(id),
        name: name.to_string(),
        brand: brand.to_string(),
        model: String::new(),
        description: String::new(),
        category: brand.to_string(),
        created_at,
    }
}

/// The three-product catalog used across filter and sort scenarios.
#[allow(dead_code)]
pub fn apparel() -> Vec<CatalogItem> {
    vec![
        item(1, "T-shirt Classic", "Nike", 100),
        item(2, "Casquette Sport", "Adidas", 300),
        item(3, "Mug Premium", "Nike", 200),
    ]
}

/// `n` items named "Item {i}" with ids 0..n.
#[allow(dead_code)]
pub fn numbered(n: usize) -> Vec<CatalogItem> {
    (0..n)
        .map(|i| item(i as u64, &format!("Item {i}"), "Generic", i as i64))
        .collect()
}

#[allow(dead_code)]
pub fn names(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|i| i.name.clone()).collect()
}
