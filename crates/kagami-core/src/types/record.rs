use serde::{Deserialize, Serialize};

use super::buckets::CategoryBuckets;
use super::category::Category;
use crate::parser::tokenizer::Token;

/// Index-aligned tokens and their categories for one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledSequence {
    tokens: Vec<Token>,
    labels: Vec<Category>,
}

impl LabeledSequence {
    /// Pairs tokens with labels.
    ///
    /// # Panics
    ///
    /// Panics if the two sequences differ in length.
    #[must_use]
    pub fn new(tokens: Vec<Token>, labels: Vec<Category>) -> Self {
        assert_eq!(
            tokens.len(),
            labels.len(),
            "token and label sequences must have equal length"
        );
        Self { tokens, labels }
    }

    /// The token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The label sequence.
    #[must_use]
    pub fn labels(&self) -> &[Category] {
        &self.labels
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` for a title with no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `(token, category)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, Category)> {
        self.tokens.iter().zip(self.labels.iter().copied())
    }

    /// Groups the tokens into category buckets.
    #[must_use]
    pub fn aggregate(&self) -> CategoryBuckets {
        crate::aggregate::aggregate(&self.tokens, &self.labels)
    }

    /// Per-position form consumed by a sequence tagger.
    #[must_use]
    pub fn to_tagged(&self) -> TaggedSample {
        TaggedSample {
            tokens: self.tokens.iter().map(|t| t.text.clone()).collect(),
            ner_tags: self.labels.clone(),
        }
    }

    /// Splits into tokens and labels.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<Category>) {
        (self.tokens, self.labels)
    }
}

/// One exported dataset record per title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// The title as supplied by the caller.
    pub title: String,

    /// Token texts in tokenization order.
    pub tokens: Vec<String>,

    /// Tokens grouped by category.
    #[serde(alias = "training_data")]
    pub category_buckets: CategoryBuckets,
}

/// Token texts with their index-aligned category names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSample {
    /// Token texts in tokenization order.
    pub tokens: Vec<String>,
    /// One category per token.
    pub ner_tags: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenizer::Tokenizer;

    fn sample() -> LabeledSequence {
        let tokens = Tokenizer::new().tokenize("[Group] Show - 01");
        let labels = vec![
            Category::Group,
            Category::Title,
            Category::Outside,
            Category::Episode,
        ];
        LabeledSequence::new(tokens, labels)
    }

    #[test]
    fn sequence_accessors() {
        let seq = sample();
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        let pairs: Vec<_> = seq.iter().map(|(t, c)| (t.text.as_str(), c)).collect();
        assert_eq!(pairs[3], ("01", Category::Episode));
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn mismatched_lengths_panic() {
        let tokens = Tokenizer::new().tokenize("a b");
        let _ = LabeledSequence::new(tokens, vec![Category::Title]);
    }

    #[test]
    fn tagged_sample_shape() {
        let json = serde_json::to_string(&sample().to_tagged()).unwrap();
        assert_eq!(
            json,
            r#"{"tokens":["[Group]","Show","-","01"],"ner_tags":["GROUP","TITLE","O","EPISODE"]}"#
        );
    }

    #[test]
    fn record_accepts_legacy_bucket_key() {
        let json = r#"{"title":"Show","tokens":["Show"],"training_data":{"TITLE":["Show"]}}"#;
        let record: TitleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category_buckets.get(Category::Title), ["Show"]);

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"category_buckets\""));
        assert!(!out.contains("training_data"));
    }
}
