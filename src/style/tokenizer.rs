//! logos-based style string tokenizer.
//!
//! A style string is a run of words separated by ASCII spaces. Repeated
//! spaces are skipped, so empty tokens never reach the resolvers. Anything
//! that is not a space (tabs included) belongs to a word.
//!
//! The resulting [`TokenSet`] keeps the first occurrence of every word in
//! input order. That order is the scan order every resolver uses when
//! "first match wins" applies.

use logos::Logos;

/// Raw lexeme produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r" +")]
enum Lexeme {
    /// A single space-delimited word.
    #[regex(r"[^ ]+")]
    Word,
}

/// Ordered, deduplicated tokens of one style string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> TokenSet<'a> {
    /// Tokenize `input`.
    pub fn parse(input: &'a str) -> Self {
        let mut tokens: Vec<&'a str> = Vec::new();
        for (result, span) in Lexeme::lexer(input).spanned() {
            if result.is_err() {
                continue;
            }
            let word = &input[span];
            if !tokens.contains(&word) {
                tokens.push(word);
            }
        }
        Self { tokens }
    }

    /// Returns `true` if `token` is present (exact, case-sensitive match).
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }

    /// Iterate tokens in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().copied()
    }

    /// Iterate the values of every token starting with `prefix`, in scan order.
    ///
    /// `with_prefix("w-")` on `"w-full h-1/2 w-1/3"` yields `full`, `1/3`.
    pub fn with_prefix<'s>(&'s self, prefix: &'s str) -> impl Iterator<Item = &'a str> + 's {
        self.tokens
            .iter()
            .filter_map(move |t| (*t).strip_prefix(prefix))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenize a style string into its ordered, deduplicated words.
pub fn tokenize(input: &str) -> Vec<&str> {
    TokenSet::parse(input).iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_spaces() {
        assert_eq!(
            tokenize("min main-center bg-red-500"),
            vec!["min", "main-center", "bg-red-500"]
        );
    }

    #[test]
    fn test_repeated_spaces_are_filtered() {
        // No empty tokens survive, wherever the extra spaces are.
        assert_eq!(tokenize("  min   rounded-md  "), vec!["min", "rounded-md"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        assert_eq!(
            tokenize("main-end min main-end cross-center min"),
            vec!["main-end", "min", "cross-center"]
        );
    }

    #[test]
    fn test_tabs_are_part_of_a_word() {
        // Only ASCII spaces separate tokens.
        assert_eq!(tokenize("min\tmain-end"), vec!["min\tmain-end"]);
    }

    #[test]
    fn test_case_sensitive() {
        let set = TokenSet::parse("Min");
        assert!(!set.contains("min"));
        assert!(set.contains("Min"));
    }

    #[test]
    fn test_with_prefix_in_scan_order() {
        let set = TokenSet::parse("w-full h-1/2 w-1/3");
        let widths: Vec<&str> = set.with_prefix("w-").collect();
        assert_eq!(widths, vec!["full", "1/3"]);
        let heights: Vec<&str> = set.with_prefix("h-").collect();
        assert_eq!(heights, vec!["1/2"]);
    }

    #[test]
    fn test_len() {
        let set = TokenSet::parse("a b a");
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
