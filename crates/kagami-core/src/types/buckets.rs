use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Tokens grouped by category, in original left-to-right order.
///
/// All eleven categories are always present, possibly empty, both in memory
/// and when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: [Vec<String>; Category::COUNT],
}

impl CategoryBuckets {
    /// Creates a mapping with every bucket empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token to the bucket of `category`.
    pub fn push(&mut self, category: Category, token: impl Into<String>) {
        self.buckets[category.index()].push(token.into());
    }

    /// Tokens assigned to `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        &self.buckets[category.index()]
    }

    /// Total number of tokens across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no bucket holds a token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Buckets in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.buckets[c.index()].as_slice()))
    }
}

impl Serialize for CategoryBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, tokens) in self.iter() {
            map.serialize_entry(category.as_str(), tokens)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryBuckets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Keys parse as `Category`, so unknown names are rejected here.
        let raw = BTreeMap::<Category, Vec<String>>::deserialize(deserializer)?;
        let mut buckets = Self::new();
        for (category, tokens) in raw {
            buckets.buckets[category.index()] = tokens;
        }
        Ok(buckets)
    }
}
