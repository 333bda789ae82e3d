use submarket_sniffer::Tokenizer;

#[cfg(test)]
mod submarket_tokenizer_tests {
    use super::*;

    #[test]
    fn test_preserves_case() {
        let tokenizer = Tokenizer::submarket_parser();

        let tokens = tokenizer.tokenize("north Dallas CBD");
        assert_eq!(tokens, vec!["north", "Dallas", "CBD"]);
    }

    #[test]
    fn test_discards_separators() {
        let tokenizer = Tokenizer::submarket_parser();

        let tokens = tokenizer.tokenize("Ft. Worth - Central/Business  District");
        assert_eq!(
            tokens,
            vec!["Ft", "Worth", "Central", "Business", "District"]
        );
    }

    #[test]
    fn test_keeps_ampersands() {
        let tokenizer = Tokenizer::submarket_parser();

        let tokens = tokenizer.tokenize("Arts & Sciences");
        assert_eq!(tokens, vec!["Arts", "&", "Sciences"]);
    }

    #[test]
    fn test_alphanumeric_runs() {
        let tokenizer = Tokenizer::submarket_parser();

        let tokens = tokenizer.tokenize("I-35 Corridor East");
        assert_eq!(tokens, vec!["I", "35", "Corridor", "East"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::submarket_parser();

        assert!(tokenizer.tokenize("  - / ").is_empty());
    }
}
