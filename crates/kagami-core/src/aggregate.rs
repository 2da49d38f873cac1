//! # Label Aggregation
//!
//! Groups labeled tokens into category buckets and builds the per-title
//! export record.

use crate::parser::heuristic::HeuristicLabeler;
use crate::parser::tokenizer::tokenize;
use crate::types::{Category, CategoryBuckets, TitleRecord};

/// Groups `tokens` by their index-aligned `labels`.
///
/// # Panics
///
/// Panics if the two slices differ in length.
pub fn aggregate<T: AsRef<str>>(tokens: &[T], labels: &[Category]) -> CategoryBuckets {
    assert_eq!(
        tokens.len(),
        labels.len(),
        "token and label sequences must have equal length"
    );

    let mut buckets = CategoryBuckets::new();
    for (token, &category) in tokens.iter().zip(labels) {
        buckets.push(category, token.as_ref());
    }
    buckets
}

/// Normalize, tokenize, label and aggregate one title with the shared labeler.
///
/// # Examples
/// ```
/// use kagami_core::{label_and_aggregate, Category};
///
/// let record = label_and_aggregate("[Erai-raws] Show - 01 [1080p][B41E05F9]");
/// assert_eq!(record.category_buckets.get(Category::Group), ["[Erai-raws]"]);
/// assert_eq!(record.category_buckets.get(Category::Episode), ["01"]);
/// assert_eq!(record.category_buckets.get(Category::Hash), ["[B41E05F9]"]);
/// ```
pub fn label_and_aggregate(title: &str) -> TitleRecord {
    label_and_aggregate_with(HeuristicLabeler::shared(), title)
}

/// As [`label_and_aggregate`], with a caller-supplied labeler.
pub fn label_and_aggregate_with(labeler: &HeuristicLabeler, title: &str) -> TitleRecord {
    let sequence = labeler.label_sequence(&tokenize(title));
    let category_buckets = sequence.aggregate();
    let (tokens, _) = sequence.into_parts();

    TitleRecord {
        title: title.to_string(),
        tokens: tokens.into_iter().map(|t| t.text).collect(),
        category_buckets,
    }
}
