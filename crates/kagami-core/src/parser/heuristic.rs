use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;
use crate::parser::lexicon::Lexicon;
use crate::parser::tokenizer::{is_bracketed, is_parenthesized, Token};
use crate::types::{Category, LabeledSequence};

// Letters, numbers and underscore count as word characters; combining marks do not.
static PUNCT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\p{L}\p{N}_\s]+$").expect("punctuation pattern is valid")
});

static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern is valid"));

static DEFAULT_LABELER: LazyLock<HeuristicLabeler> = LazyLock::new(HeuristicLabeler::default);

/// Configuration for the heuristic labeler.
#[derive(Debug, Clone)]
pub struct LabelerConfig {
    /// Dictionary terms added on top of the built-in lexicon
    pub extra_terms: Vec<(String, Category)>,
    /// Label any core text containing "DUB" as audio
    pub fuzzy_dub: bool,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            extra_terms: Vec::new(),
            fuzzy_dub: true,
        }
    }
}

impl LabelerConfig {
    /// Create a new labeler configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dictionary term.
    pub fn with_term(mut self, term: impl Into<String>, category: Category) -> Self {
        self.extra_terms.push((term.into(), category));
        self
    }

    /// Enable or disable the substring "DUB" audio rule.
    pub fn with_fuzzy_dub(mut self, enabled: bool) -> Self {
        self.fuzzy_dub = enabled;
        self
    }
}

/// Everything a rule may look at for one position.
struct Context<'a> {
    text: &'a str,
    /// Uppercased text.
    upper: String,
    /// Uppercased text with `[` `]` removed.
    core: String,
    bracketed: bool,
    parenthesized: bool,
    prev: String,
    next: String,
    lexicon: &'a Lexicon,
    fuzzy_dub: bool,
}

struct Rule {
    name: &'static str,
    apply: fn(&Context<'_>) -> Option<Category>,
}

/// Decision list. The first rule returning `Some` decides.
const RULES: &[Rule] = &[
    Rule { name: "bracket_hash", apply: bracket_hash },
    Rule { name: "dictionary", apply: dictionary },
    Rule { name: "fuzzy_dub", apply: fuzzy_dub },
    Rule { name: "bracket_group", apply: bracket_group },
    Rule { name: "paren_meta", apply: paren_meta },
    Rule { name: "number_after_marker", apply: number_after_marker },
    Rule { name: "marker_word", apply: marker_word },
    Rule { name: "split_codec", apply: split_codec },
    Rule { name: "punctuation", apply: punctuation },
    Rule { name: "title", apply: title },
];

fn bracket_hash(ctx: &Context<'_>) -> Option<Category> {
    (ctx.bracketed && ctx.core.len() == 8 && ctx.core.bytes().all(|b| b.is_ascii_hexdigit()))
        .then_some(Category::Hash)
}

fn dictionary(ctx: &Context<'_>) -> Option<Category> {
    ctx.lexicon.lookup(&ctx.core)
}

// No word boundary: "[Dubbed]" and "Dubai" both match.
fn fuzzy_dub(ctx: &Context<'_>) -> Option<Category> {
    (ctx.fuzzy_dub && ctx.core.contains("DUB")).then_some(Category::Audio)
}

fn bracket_group(ctx: &Context<'_>) -> Option<Category> {
    ctx.bracketed.then_some(Category::Group)
}

fn paren_meta(ctx: &Context<'_>) -> Option<Category> {
    ctx.parenthesized.then_some(Category::Meta)
}

fn number_after_marker(ctx: &Context<'_>) -> Option<Category> {
    if !DIGITS_PATTERN.is_match(ctx.text) {
        return None;
    }
    match ctx.prev.as_str() {
        "S" | "SEASON" => Some(Category::Season),
        "E" | "EPISODE" | "-" => Some(Category::Episode),
        _ => None,
    }
}

fn marker_word(ctx: &Context<'_>) -> Option<Category> {
    match ctx.upper.as_str() {
        "S" | "SEASON" => Some(Category::Season),
        "E" | "EPISODE" => Some(Category::Episode),
        _ => None,
    }
}

fn split_codec(ctx: &Context<'_>) -> Option<Category> {
    let is_codec_number = |s: &str| s == "264" || s == "265";

    let hit = match ctx.upper.as_str() {
        "H" => ctx.next == "." || is_codec_number(&ctx.next),
        "." => ctx.prev == "H" && is_codec_number(&ctx.next),
        s if is_codec_number(s) => matches!(ctx.prev.as_str(), "." | "H" | "X"),
        _ => false,
    };
    hit.then_some(Category::Codec)
}

fn punctuation(ctx: &Context<'_>) -> Option<Category> {
    PUNCT_PATTERN.is_match(ctx.text).then_some(Category::Outside)
}

fn title(_: &Context<'_>) -> Option<Category> {
    Some(Category::Title)
}

/// Rule-based token labeler.
///
/// Each position is labeled from its own text and the raw text of its
/// immediate neighbours; labels already assigned to other positions are
/// never consulted, so any position can be labeled independently.
#[derive(Debug, Clone)]
pub struct HeuristicLabeler {
    lexicon: Cow<'static, Lexicon>,
    fuzzy_dub: bool,
}

impl Default for HeuristicLabeler {
    fn default() -> Self {
        Self {
            lexicon: Cow::Borrowed(Lexicon::shared()),
            fuzzy_dub: true,
        }
    }
}

impl HeuristicLabeler {
    /// Constructs a labeler from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `KagamiError::EmptyTerm` or `KagamiError::ConflictingTerm` if an
    /// extra dictionary term is invalid.
    pub fn new(config: LabelerConfig) -> Result<Self> {
        let lexicon = if config.extra_terms.is_empty() {
            Cow::Borrowed(Lexicon::shared())
        } else {
            let mut lexicon = Lexicon::shared().clone();
            for (term, category) in &config.extra_terms {
                lexicon.insert(term, *category)?;
            }
            Cow::Owned(lexicon)
        };

        debug!(
            terms = lexicon.len(),
            fuzzy_dub = config.fuzzy_dub,
            "constructed heuristic labeler"
        );

        Ok(Self {
            lexicon,
            fuzzy_dub: config.fuzzy_dub,
        })
    }

    /// The process-wide labeler with the built-in tables.
    pub fn shared() -> &'static HeuristicLabeler {
        &DEFAULT_LABELER
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names() -> impl Iterator<Item = &'static str> {
        RULES.iter().map(|r| r.name)
    }

    /// The lexicon used for dictionary lookups.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Label the token at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= tokens.len()`.
    pub fn label<T: AsRef<str>>(&self, tokens: &[T], position: usize) -> Category {
        assert!(
            position < tokens.len(),
            "label position {position} out of range for {} tokens",
            tokens.len()
        );

        let text = tokens[position].as_ref();
        let bracketed = is_bracketed(text);
        let inner = if bracketed { &text[1..text.len() - 1] } else { text };
        let neighbour = |i: Option<usize>| {
            i.and_then(|i| tokens.get(i))
                .map(|t| t.as_ref().to_uppercase())
                .unwrap_or_default()
        };

        let ctx = Context {
            text,
            upper: text.to_uppercase(),
            core: inner.to_uppercase(),
            bracketed,
            parenthesized: is_parenthesized(text),
            prev: neighbour(position.checked_sub(1)),
            next: neighbour(Some(position + 1)),
            lexicon: &self.lexicon,
            fuzzy_dub: self.fuzzy_dub,
        };

        let (rule, category) = RULES
            .iter()
            .find_map(|rule| (rule.apply)(&ctx).map(|c| (rule.name, c)))
            .unwrap_or(("title", Category::Title));

        trace!(position, token = text, rule, %category, "labeled token");
        category
    }

    /// Label every token left to right.
    pub fn label_sequence(&self, tokens: &[Token]) -> LabeledSequence {
        let labels = (0..tokens.len()).map(|i| self.label(tokens, i)).collect();
        LabeledSequence::new(tokens.to_vec(), labels)
    }
}

/// Label the token at `position` with the shared labeler.
///
/// # Panics
///
/// Panics if `position >= tokens.len()`.
pub fn label<T: AsRef<str>>(tokens: &[T], position: usize) -> Category {
    HeuristicLabeler::shared().label(tokens, position)
}
