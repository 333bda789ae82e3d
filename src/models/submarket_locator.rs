use crate::constants::SUBMARKET_LABEL_EXCLUSIONS;
use crate::utils::collapse_whitespace;
use crate::Error;
use regex::Regex;
use std::sync::LazyLock;

static SUBMARKET_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Submarket[ \t]+").expect("valid submarket label pattern"));

/// Finds a report's submarket on its "Submarket Cluster" page.
///
/// Cluster pages list rows such as `Dallas-Fort Worth - North Central Expwy 12 ...`.
/// Long submarket names wrap onto the next line ahead of the word `Submarket`:
///
/// ```text
/// Dallas-Fort Worth - Las Colinas 38 1,204,331 ...
/// Urban Center Submarket
/// ```
///
/// Pages without a listing for the market may still name the submarket
/// directly, as in `Submarket Las Colinas`.
pub struct SubmarketLocator {
    wrapped: Regex,
    single_line: Regex,
}

impl SubmarketLocator {
    pub fn new(market: &str) -> Result<Self, Error> {
        let market = regex::escape(market);

        let wrapped = Regex::new(&format!(
            r"(?mi)^\s*{}\s-\s*(?P<first>[A-Za-z][A-Za-z\s/&'.-]*?)\s+\d[^\n]*\n(?P<cont>[A-Za-z\s/&'.-]*?)\s+Submarket\b",
            market
        ))?;

        let single_line = Regex::new(&format!(
            r"(?mi)^\s*{}\s*-\s*(?P<sm>[A-Za-z][A-Za-z\s/&'.-]*?)(?:\s+\d|\s+Submarket\b|$)",
            market
        ))?;

        Ok(Self {
            wrapped,
            single_line,
        })
    }

    /// Returns the submarket with internal whitespace collapsed, trying the
    /// wrapped two-line layout before the single-line one.
    pub fn locate(&self, page_text: &str) -> Option<String> {
        let page_text = page_text.replace("\r\n", "\n");

        if let Some(captures) = self.wrapped.captures(&page_text) {
            let joined = format!("{} {}", &captures["first"], &captures["cont"]);
            return Some(collapse_whitespace(&joined));
        }

        self.single_line
            .captures(&page_text)
            .map(|captures| collapse_whitespace(&captures["sm"]))
    }

    /// Returns the first `Submarket <name>` label on the page, skipping headings
    /// such as `Submarket Cluster` and numeric labels such as `Submarket 3 Star`.
    pub fn locate_label(page_text: &str) -> Option<String> {
        SUBMARKET_LABEL.find_iter(page_text).find_map(|found| {
            let rest = &page_text[found.end()..];
            let line = rest.lines().next().unwrap_or("");

            // A later label on the same line ends this one
            let label = line.split("Submarket ").next().unwrap_or("").trim();

            if label.is_empty() || Self::is_heading(label) {
                None
            } else {
                Some(collapse_whitespace(label))
            }
        })
    }

    fn is_heading(label: &str) -> bool {
        if label.starts_with(|c: char| c.is_ascii_digit()) {
            return true;
        }

        let first_word = label
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()
            .unwrap_or("");

        SUBMARKET_LABEL_EXCLUSIONS.contains(&first_word)
    }
}
