//! The resolution seam: a canonical key in, a list of clothing items out.

use async_trait::async_trait;

use crate::error::Result;
use crate::key::CanonicalKey;

/// Ordered clothing items, duplicates kept, in the source's order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationSet {
    items: Vec<String>,
}

impl RecommendationSet {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One retrieval strategy (local table or remote advice service).
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve one key. Each call produces a fresh set; nothing is cached.
    async fn resolve(&self, key: &CanonicalKey) -> Result<RecommendationSet>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
