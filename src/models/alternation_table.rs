use crate::constants::{ALTERNATION_TABLE, PROTECTED_TERMS};

/// Read-only view over the static table of accepted spellings.
pub struct AlternationTable;

impl AlternationTable {
    /// Accepted surface forms for a canonical term (matched case-insensitively).
    pub fn surface_forms(term: &str) -> Option<&'static [&'static str]> {
        let term = term.to_lowercase();

        ALTERNATION_TABLE
            .iter()
            .find(|(canonical, _)| *canonical == term)
            .map(|(_, forms)| *forms)
    }

    /// Regex fragment for a single token: a non-capturing disjunction of the
    /// term's surface forms, or the escaped token itself when the term is unknown.
    pub fn token_pattern(token: &str) -> String {
        match Self::surface_forms(token) {
            Some(forms) => {
                let alternatives: Vec<String> =
                    forms.iter().map(|form| regex::escape(form)).collect();
                format!("(?:{})", alternatives.join("|"))
            }
            None => regex::escape(token),
        }
    }

    pub fn is_protected(term: &str) -> bool {
        PROTECTED_TERMS.contains(&term.to_lowercase().as_str())
    }

    pub fn terms() -> impl Iterator<Item = &'static str> {
        ALTERNATION_TABLE.iter().map(|(canonical, _)| *canonical)
    }
}
