//! # Token Categories
//!
//! The closed label set assigned to every token of a release title.
//! Unlike BIO schemes, each category is a single tag: a multi-token title
//! is simply a run of `TITLE` tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KagamiError;

/// Semantic category of a title token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Release group tag, e.g. `[Erai-raws]`.
    #[serde(rename = "GROUP")]
    Group,
    /// Season marker or season number.
    #[serde(rename = "SEASON")]
    Season,
    /// Episode marker or episode number.
    #[serde(rename = "EPISODE")]
    Episode,
    /// Resolution, e.g. `1080p`.
    #[serde(rename = "RES")]
    Res,
    /// Video source or streaming service, e.g. `WEBRip`, `CR`.
    #[serde(rename = "SOURCE")]
    Source,
    /// Audio codec, channel layout or dub marker.
    #[serde(rename = "AUDIO")]
    Audio,
    /// Video codec or bit depth, including split `H . 264` fragments.
    #[serde(rename = "CODEC")]
    Codec,
    /// Punctuation.
    #[serde(rename = "O")]
    Outside,
    /// Anything else; assumed to be part of the show title.
    #[serde(rename = "TITLE")]
    Title,
    /// 8-hex-digit checksum in brackets.
    #[serde(rename = "HASH")]
    Hash,
    /// Parenthesized metadata.
    #[serde(rename = "META")]
    Meta,
}

impl Category {
    /// Total number of distinct categories.
    pub const COUNT: usize = 11;

    /// All categories in canonical bucket order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Group,
        Category::Season,
        Category::Episode,
        Category::Res,
        Category::Source,
        Category::Audio,
        Category::Codec,
        Category::Outside,
        Category::Title,
        Category::Hash,
        Category::Meta,
    ];

    /// Dense tag id, matching the position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Group => 0,
            Category::Season => 1,
            Category::Episode => 2,
            Category::Res => 3,
            Category::Source => 4,
            Category::Audio => 5,
            Category::Codec => 6,
            Category::Outside => 7,
            Category::Title => 8,
            Category::Hash => 9,
            Category::Meta => 10,
        }
    }

    /// Get category from a dense tag id.
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Canonical upper-case name used in exported datasets.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Group => "GROUP",
            Category::Season => "SEASON",
            Category::Episode => "EPISODE",
            Category::Res => "RES",
            Category::Source => "SOURCE",
            Category::Audio => "AUDIO",
            Category::Codec => "CODEC",
            Category::Outside => "O",
            Category::Title => "TITLE",
            Category::Hash => "HASH",
            Category::Meta => "META",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = KagamiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| KagamiError::UnknownCategory(s.to_string()))
    }
}
