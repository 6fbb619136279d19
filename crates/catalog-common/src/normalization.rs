use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase for case-insensitive substring matching.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Primary collation key: NFD, combining marks removed, lowercased.
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Locale-aware comparison for display names.
///
/// Base letters decide first ("eclair" < "Ecole" < "école" < "f"), then accents,
/// then case. Only identical strings compare equal.
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| {
            let a_lower: String = a.nfc().collect::<String>().to_lowercase();
            let b_lower: String = b.nfc().collect::<String>().to_lowercase();
            a_lower.cmp(&b_lower)
        })
        .then_with(|| a.cmp(b))
}
