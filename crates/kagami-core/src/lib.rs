//! # Kagami Core
//!
//! Turns raw anime release titles into silver-standard training data for a
//! sequence tagger. A title is normalized, split into tokens by a fixed
//! grammar, and every token is given one of eleven categories by a
//! priority-ordered rule list.
//!
//! ## Quick Start
//!
//! ```rust
//! use kagami_core::{label_and_aggregate, Category};
//!
//! let record = label_and_aggregate("[Erai-raws] Mushoku no Eiyuu - 01 [1080p][B41E05F9]");
//!
//! assert_eq!(record.category_buckets.get(Category::Group), ["[Erai-raws]"]);
//! assert_eq!(record.category_buckets.get(Category::Res), ["[1080p]"]);
//! assert_eq!(record.category_buckets.get(Category::Hash), ["[B41E05F9]"]);
//! ```
pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod types;

// Re-export primary API
pub use aggregate::{aggregate, label_and_aggregate, label_and_aggregate_with};
pub use dataset::{build_records, read_records, DatasetWriter};
pub use error::{KagamiError, Result};
pub use normalize::normalize;
pub use parser::{label, tokenize, HeuristicLabeler, LabelerConfig, Lexicon, Token, Tokenizer};
pub use types::{Category, CategoryBuckets, LabeledSequence, TaggedSample, TitleRecord};
