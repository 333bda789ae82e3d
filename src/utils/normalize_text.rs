use crate::constants::HYPHEN_VARIANTS;

/// Collapses every run of whitespace (including line breaks) into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replaces en-dash, em-dash and non-breaking hyphen with an ASCII hyphen.
pub fn normalize_hyphens(text: &str) -> String {
    text.chars()
        .map(|c| if HYPHEN_VARIANTS.contains(&c) { '-' } else { c })
        .collect()
}
