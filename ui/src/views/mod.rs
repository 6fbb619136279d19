pub mod filter_bar;
pub mod gallery;
pub mod pagination;
pub mod product_grid;

pub fn plural(count: usize) -> &'static str {
    if count != 1 {
        "s"
    } else {
        ""
    }
}

/// Cut `text` to at most `max` chars, appending an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", text[..end].trim_end()),
        None => text.to_string(),
    }
}
