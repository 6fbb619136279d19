use serde::{Deserialize, Serialize};

/// Garment sizes in display order.
pub const SIZE_ORDER: &[&str] = &["XS", "S", "M", "L", "XL", "2XL", "3XL", "4XL", "5XL"];

/// A purchasable color/size combination of a blueprint at one print provider.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub cost_formatted: String,
}

/// Group variants by color, colors in first-seen order, variants in input order.
pub fn group_by_color(variants: &[Variant]) -> Vec<(String, Vec<&Variant>)> {
    let mut groups: Vec<(String, Vec<&Variant>)> = Vec::new();
    for variant in variants {
        match groups.iter_mut().find(|(color, _)| *color == variant.color) {
            Some((_, members)) => members.push(variant),
            None => groups.push((variant.color.clone(), vec![variant])),
        }
    }
    groups
}

/// Distinct sizes of available variants in `color`, in garment size order.
/// Sizes outside [`SIZE_ORDER`] follow the known ones in input order.
pub fn sizes_for_color(variants: &[Variant], color: &str) -> Vec<String> {
    let mut sizes: Vec<String> = Vec::new();
    for variant in variants
        .iter()
        .filter(|v| v.is_available && v.color == color)
    {
        if !sizes.contains(&variant.size) {
            sizes.push(variant.size.clone());
        }
    }
    sizes.sort_by_key(|size| size_rank(size));
    sizes
}

fn size_rank(size: &str) -> usize {
    SIZE_ORDER
        .iter()
        .position(|known| known.eq_ignore_ascii_case(size))
        .unwrap_or(SIZE_ORDER.len())
}

/// Variant ids of `color` with the given sizes, for building a product request.
pub fn variant_ids_for(variants: &[Variant], color: &str, sizes: &[String]) -> Vec<u64> {
    variants
        .iter()
        .filter(|v| v.is_available && v.color == color && sizes.contains(&v.size))
        .map(|v| v.id)
        .collect()
}
