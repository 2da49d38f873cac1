//! Dictionary tables mapping uppercased token content to a category.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{KagamiError, Result};
use crate::types::Category;

/// Resolution terms.
pub const RES_TERMS: &[&str] = &["1080P", "720P", "480P", "2160P", "4K"];

/// Physical and web video sources.
pub const VIDEO_SOURCES: &[&str] = &["WEB-DL", "WEBRIP", "BD", "BLURAY", "DVD", "HDTV"];

/// Streaming service tags, also labeled `SOURCE`.
pub const STREAMING_SERVICES: &[&str] = &[
    "KKTV", "CR", "NF", "AMZN", "DSNP", "BILI", "HIDIVE", "APPS", "YTB",
];

/// Audio codecs, channel layouts and dub markers.
pub const AUDIO_TERMS: &[&str] = &[
    "AAC",
    "AC3",
    "DDP",
    "FLAC",
    "OPUS",
    "DTS",
    "TRUEHD",
    "DUAL",
    "MULTI",
    "2.0",
    "5.1",
    "7.1",
    "ENGLISH DUB",
    "DUB",
];

/// Video codecs and bit depths.
pub const CODEC_TERMS: &[&str] = &[
    "HEVC", "AVC", "X264", "X265", "H.264", "H.265", "10BIT", "8BIT",
];

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::builtin);

/// Immutable lookup from core text to category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    terms: HashMap<String, Category>,
}

impl Lexicon {
    /// An empty lexicon.
    pub fn empty() -> Self {
        Self {
            terms: HashMap::new(),
        }
    }

    /// The shared built-in lexicon.
    pub fn shared() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    fn builtin() -> Self {
        let tables: [(&[&str], Category); 5] = [
            (RES_TERMS, Category::Res),
            (VIDEO_SOURCES, Category::Source),
            (STREAMING_SERVICES, Category::Source),
            (AUDIO_TERMS, Category::Audio),
            (CODEC_TERMS, Category::Codec),
        ];

        let terms = tables
            .into_iter()
            .flat_map(|(words, category)| words.iter().map(move |w| (w.to_string(), category)))
            .collect();
        Self { terms }
    }

    /// Add a term. The term is trimmed and uppercased before insertion.
    ///
    /// # Errors
    ///
    /// `KagamiError::EmptyTerm` for a blank term, `KagamiError::ConflictingTerm`
    /// if the term already maps to a different category.
    pub fn insert(&mut self, term: &str, category: Category) -> Result<()> {
        let key = term.trim().to_uppercase();
        if key.is_empty() {
            return Err(KagamiError::EmptyTerm);
        }

        match self.terms.get(&key) {
            Some(&existing) if existing != category => Err(KagamiError::ConflictingTerm {
                term: key,
                existing,
                requested: category,
            }),
            Some(_) => Ok(()),
            None => {
                self.terms.insert(key, category);
                Ok(())
            }
        }
    }

    /// Look up already-uppercased core text.
    pub fn lookup(&self, core_text: &str) -> Option<Category> {
        self.terms.get(core_text).copied()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the lexicon holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::shared().clone()
    }
}
