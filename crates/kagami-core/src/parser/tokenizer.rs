//! # Release Title Tokenizer
//!
//! Splits a normalized release title into atomic tokens for sequence
//! labeling. The grammar is a fixed priority list; at each position the
//! first alternative that matches wins:
//!
//! 1. `[...]` bracketed run
//! 2. `(...)` parenthesized run
//! 3. resolution shorthand (`1080p`)
//! 4. numeric literal (`264`, `2.0`)
//! 5. word run with inner `'`/`-` joins (`Erai-raws`)
//! 6. any other single non-whitespace character
//!
//! Whitespace is skipped. Every other character ends up in exactly one token.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// A token extracted from a title with positional information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The token text, verbatim from the normalized title
    pub text: String,
    /// Start byte offset in the normalized title
    pub start: usize,
    /// End byte offset (exclusive) in the normalized title
    pub end: usize,
    /// Token index in the sequence
    pub index: usize,
}

impl Token {
    /// `[...]` delimited.
    pub fn is_bracketed(&self) -> bool {
        is_bracketed(&self.text)
    }

    /// `(...)` delimited.
    pub fn is_parenthesized(&self) -> bool {
        is_parenthesized(&self.text)
    }
}

pub(crate) fn is_bracketed(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('[') && text.ends_with(']')
}

pub(crate) fn is_parenthesized(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('(') && text.ends_with(')')
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Token grammar. Alternation is leftmost-first, which gives the priority order.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\[[^\]]+\]",
        r"|\([^)]+\)",
        r"|\d{1,4}[pP]",
        r"|\d+(?:\.\d+)?",
        r"|[A-Za-z]+(?:['-][A-Za-z]+)*",
        r"|\S",
    ))
    .expect("token grammar is a valid regex")
});

/// Tokenizer for release titles.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize an already normalized title.
    ///
    /// # Examples
    /// ```
    /// use kagami_core::parser::tokenizer::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().tokenize("[Erai-raws] Show - 01 [1080p]");
    /// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    /// assert_eq!(texts, ["[Erai-raws]", "Show", "-", "01", "[1080p]"]);
    /// ```
    pub fn tokenize(&self, normalized: &str) -> Vec<Token> {
        TOKEN_PATTERN
            .find_iter(normalized)
            .enumerate()
            .map(|(index, m)| Token {
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
                index,
            })
            .collect()
    }
}

/// Normalize a raw title and tokenize it.
///
/// Spans refer to `normalize(raw)`. Dataset building and inference-time
/// re-tokenization must both go through this function so that tokens line
/// up with their labels.
pub fn tokenize(raw: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(&normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        Tokenizer::new()
            .tokenize(input)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    /// Rebuilds the title from spans, requiring every gap to be whitespace.
    fn reconstruct(input: &str, tokens: &[Token]) -> String {
        let mut out = String::new();
        let mut cursor = 0;
        for token in tokens {
            let gap = &input[cursor..token.start];
            assert!(gap.chars().all(char::is_whitespace), "non-whitespace gap {gap:?}");
            out.push_str(gap);
            out.push_str(&input[token.start..token.end]);
            assert_eq!(&input[token.start..token.end], token.text);
            cursor = token.end;
        }
        let tail = &input[cursor..];
        assert!(tail.chars().all(char::is_whitespace), "non-whitespace tail {tail:?}");
        out.push_str(tail);
        out
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = Tokenizer::new().tokenize("[SubsPlease] Jujutsu Kaisen - 24 (1080p)");

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].text, "[SubsPlease]");
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].end, 12);
        assert_eq!(tokens[5].text, "(1080p)");
        assert_eq!(tokens[5].index, 5);
    }

    #[test]
    fn test_full_title() {
        assert_eq!(
            texts("[Erai-raws] Mushoku no Eiyuu - 01 [1080p ADN WEBRip HEVC AAC][MultiSub][B41E05F9]"),
            [
                "[Erai-raws]",
                "Mushoku",
                "no",
                "Eiyuu",
                "-",
                "01",
                "[1080p ADN WEBRip HEVC AAC]",
                "[MultiSub]",
                "[B41E05F9]",
            ]
        );
    }

    #[test]
    fn test_resolution_before_number() {
        assert_eq!(texts("1080p 720P 12345p"), ["1080p", "720P", "12345", "p"]);
    }

    #[test]
    fn test_numeric_literals() {
        assert_eq!(texts("AAC2.0 5.1"), ["AAC", "2.0", "5.1"]);
        assert_eq!(texts("Vol.2."), ["Vol", ".", "2", "."]);
    }

    #[test]
    fn test_split_codec_fragments() {
        assert_eq!(texts("H.264 x265"), ["H", ".", "264", "x", "265"]);
    }

    #[test]
    fn test_word_joins() {
        assert_eq!(
            texts("Kaguya-sama Don't web-dl -x- a--b"),
            ["Kaguya-sama", "Don't", "web-dl", "-", "x", "-", "a", "-", "-", "b"]
        );
    }

    #[test]
    fn test_dotted_title() {
        assert_eq!(
            texts("One.Piece.1084.VOSTFR"),
            ["One", ".", "Piece", ".", "1084", ".", "VOSTFR"]
        );
    }

    #[test]
    fn test_unclosed_delimiters_fall_through() {
        assert_eq!(texts("[Group Title"), ["[", "Group", "Title"]);
        assert_eq!(texts("()[]"), ["(", ")", "[", "]"]);
    }

    #[test]
    fn test_non_ascii_letters_are_single_chars() {
        assert_eq!(texts("呪術 Pokémon"), ["呪", "術", "Pok", "é", "mon"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::new().tokenize("").is_empty());
        assert!(Tokenizer::new().tokenize("   ").is_empty());
    }

    #[test]
    fn test_coverage_reconstructs_title() {
        let samples = [
            "[Erai-raws] Mushoku no Eiyuu - 01 [1080p ADN WEBRip HEVC AAC][MultiSub][B41E05F9]",
            "  One.Piece.1084.VOSTFR.1080p.WEB.x264-AAC.mkv ",
            "[Judas] Golden Kamuy S3 - 01-12 (1080p) [Batch]",
            "呪術廻戦 第2期 | Jujutsu Kaisen S2 - 47 (WEB 1080p H.264 AAC 2.0)",
            "[[weird]] ((nest)) ]] )) !!",
            "",
        ];
        for s in samples {
            let tokens = Tokenizer::new().tokenize(s);
            assert_eq!(reconstruct(s, &tokens), s);
            assert!(tokens.iter().all(|t| !t.text.is_empty()));
            assert!(tokens.iter().enumerate().all(|(i, t)| t.index == i));
        }
    }

    #[test]
    fn test_free_tokenize_normalizes() {
        let tokens = tokenize("［Ｇｒｏｕｐ］\u{200B}Show");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["[Group]", "Show"]);
    }

    #[test]
    fn test_delimiter_predicates() {
        let tokens = Tokenizer::new().tokenize("[A] (B) C");
        assert!(tokens[0].is_bracketed());
        assert!(!tokens[0].is_parenthesized());
        assert!(tokens[1].is_parenthesized());
        assert!(!tokens[2].is_bracketed());
    }
}
