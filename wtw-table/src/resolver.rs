//! Exact-match lookup against an `AnswerTable`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use wtw_core::{CanonicalKey, RecommendationSet, Resolver, Result, WtwError};

use crate::table::AnswerTable;

/// Resolves keys locally. Unrecognized tokens are not validated; they just miss.
#[derive(Debug, Clone)]
pub struct TableResolver {
    table: Arc<AnswerTable>,
}

impl TableResolver {
    pub fn new(table: Arc<AnswerTable>) -> Self {
        Self { table }
    }

    /// Resolver over the compiled-in snapshot.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(AnswerTable::embedded()?))
    }

    pub fn lookup(&self, key: &CanonicalKey) -> Result<RecommendationSet> {
        let fingerprint = key.fingerprint();
        match self.table.get(&fingerprint) {
            Some(answer) => {
                debug!(%fingerprint, items = answer.clothes.len(), "table hit");
                Ok(RecommendationSet::new(answer.clothes.clone()))
            }
            None => {
                debug!(%fingerprint, "table miss");
                Err(WtwError::NotFound(fingerprint))
            }
        }
    }
}

#[async_trait]
impl Resolver for TableResolver {
    async fn resolve(&self, key: &CanonicalKey) -> Result<RecommendationSet> {
        self.lookup(key)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}
