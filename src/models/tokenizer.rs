use crate::constants::SUBMARKET_TOKEN_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static SUBMARKET_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SUBMARKET_TOKEN_PATTERN).expect("valid submarket token pattern"));

#[derive(Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for submarket names
    pub fn submarket_parser() -> Self {
        Self
    }

    /// Splits the text into alphanumeric runs, ampersands, and apostrophe-joined words.
    ///
    /// Everything else (whitespace, hyphens, slashes, punctuation) is discarded.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn tokenize(self, text: &str) -> Vec<String> {
        SUBMARKET_TOKEN_REGEX
            .find_iter(text)
            .map(|token| token.as_str().to_string())
            .collect()
    }
}
