//! # Title Normalization
//!
//! Cleans raw release titles before tokenization: NFKC folds full-width and
//! compatibility forms, then invisible formatting characters are removed.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;
use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

/// Invisible code points stripped regardless of their general category.
///
/// U+034F (combining grapheme joiner) is a nonspacing mark, so the
/// control/format sweep alone would miss it.
pub const INVISIBLE_CHARS: &[char] = &[
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{200E}', // left-to-right mark
    '\u{200F}', // right-to-left mark
    '\u{FEFF}', // byte order mark
    '\u{00AD}', // soft hyphen
    '\u{2060}', // word joiner
    '\u{180E}', // mongolian vowel separator
    '\u{034F}', // combining grapheme joiner
];

static INVISIBLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let listed: String = INVISIBLE_CHARS.iter().map(|c| format!("\\x{{{:X}}}", *c as u32)).collect();
    Regex::new(&format!(r"[{listed}\p{{Cc}}\p{{Cf}}]+")).expect("invisible character class is valid")
});

/// Normalize a raw title.
///
/// Casing and visible whitespace are preserved. The result is stable:
/// `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
/// ```
/// use kagami_core::normalize::normalize;
///
/// assert_eq!(normalize("［Ｅｒａｉ］\u{200B} Show"), "[Erai] Show");
/// ```
pub fn normalize(raw: &str) -> String {
    let folded = nfkc(raw);
    if let Cow::Owned(stripped) = strip_invisible(&folded) {
        // Removing a joiner can expose a newly composable sequence; fold once
        // more so a second pass is a no-op.
        return nfkc(&stripped).into_owned();
    }
    folded.into_owned()
}

/// Remove [`INVISIBLE_CHARS`] and every control/format character.
pub fn strip_invisible(text: &str) -> Cow<'_, str> {
    let stripped = INVISIBLE_PATTERN.replace_all(text, "");
    if let Cow::Owned(ref s) = stripped {
        trace!(removed = text.len() - s.len(), "stripped invisible characters");
    }
    stripped
}

fn nfkc(text: &str) -> Cow<'_, str> {
    match is_nfkc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfkc().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_untouched() {
        let title = "[Erai-raws] Mushoku no Eiyuu - 01 [1080p]";
        assert_eq!(normalize(title), title);
    }

    #[test]
    fn test_fullwidth_folds() {
        assert_eq!(normalize("１０８０ｐ"), "1080p");
        assert_eq!(normalize("（ＢＤ）"), "(BD)");
    }

    #[test]
    fn test_invisible_chars_removed() {
        for c in INVISIBLE_CHARS {
            let input = format!("Show{c}Name");
            assert_eq!(normalize(&input), "ShowName", "failed for U+{:04X}", *c as u32);
        }
    }

    #[test]
    fn test_control_and_format_removed() {
        assert_eq!(normalize("Show\u{0007}Name"), "ShowName");
        assert_eq!(normalize("Show\u{202E}Name"), "ShowName");
        assert_eq!(normalize("\u{0000}Show"), "Show");
    }

    #[test]
    fn test_tabs_and_newlines_are_control() {
        // Tab and newline are Cc; only visible spaces survive.
        assert_eq!(normalize("A\tB\nC D"), "ABC D");
    }

    #[test]
    fn test_case_and_cjk_preserved() {
        assert_eq!(normalize("MiXeD 呪術廻戦"), "MiXeD 呪術廻戦");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\u{200B}\u{FEFF}"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "［SubsPlease］ Ｊｕｊｕｔｓｕ - ２４",
            "e\u{034F}\u{0301}",
            "A\u{00AD}\u{0301}B",
            "ﬁ ① ㍻ Ⅻ",
            "\u{FEFF}[Group]\u{200D} Title",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_strip_invisible_borrows_clean_input() {
        assert!(matches!(strip_invisible("clean"), Cow::Borrowed(_)));
    }
}
