use crate::constants::SUBMARKET_TOKEN_SEPARATOR;
use crate::models::{AlternationTable, Tokenizer};
use crate::Error;
use regex::{Regex, RegexBuilder};

/// Compiled, abbreviation-tolerant matcher for a single submarket name.
///
/// `Fort Worth CBD` matches `Ft Worth - Central Business District`,
/// `ft-worth cbd` and `FortWorth/CBD`.
#[derive(Debug, Clone)]
pub struct SubmarketPattern {
    source: String,
    pattern: String,
    unanchored: Regex,
    anchored: Regex,
}

impl SubmarketPattern {
    pub fn build(submarket: &str) -> Result<Self, Error> {
        let tokens = Tokenizer::submarket_parser().tokenize(submarket);

        let pattern = tokens
            .iter()
            .map(|token| AlternationTable::token_pattern(token))
            .collect::<Vec<_>>()
            .join(SUBMARKET_TOKEN_SEPARATOR);

        let unanchored = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        let anchored = RegexBuilder::new(&format!(r"^(?:{})$", pattern))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            source: submarket.to_string(),
            pattern,
            unanchored,
            anchored,
        })
    }

    /// The submarket text this pattern was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The uncompiled regex, useful for diagnostics.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether the submarket occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.unanchored.is_match(text)
    }

    /// Whether `text` in its entirety spells the submarket (surrounding whitespace ignored).
    pub fn is_full_match(&self, text: &str) -> bool {
        self.anchored.is_match(text.trim())
    }
}
