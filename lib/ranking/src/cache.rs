//! Memoized vectorization for repeated queries on the same catalog
//!
//! [`SimilarityRanker`] rebuilds its TF-IDF index on every call. For larger
//! catalogs, [`CachedSimilarityRanker`] keeps the last index keyed by the
//! catalog fingerprint and hands out shared `Arc` snapshots of it.

use crate::explain::Explanation;
use crate::rank::RankedResult;
use crate::similarity::{rank_neighbours, SimilarityRanker};
use crate::tfidf::TfidfIndex;
use parking_lot::RwLock;
use std::sync::Arc;
use tastebud_core::{ensure_top_n, Catalog, Result};
use tracing::debug;

/// A [`SimilarityRanker`] that reuses its index while the catalog is unchanged
#[derive(Debug, Default)]
pub struct CachedSimilarityRanker {
    ranker: SimilarityRanker,
    index: RwLock<Option<Arc<TfidfIndex>>>,
}

impl CachedSimilarityRanker {
    pub fn new(ranker: SimilarityRanker) -> Self {
        Self {
            ranker,
            index: RwLock::new(None),
        }
    }

    pub fn ranker(&self) -> &SimilarityRanker {
        &self.ranker
    }

    /// Index for `catalog`, built at most once per fingerprint
    pub fn index_for(&self, catalog: &Catalog) -> Arc<TfidfIndex> {
        let fingerprint = catalog.fingerprint();

        if let Some(index) = self.index.read().as_ref() {
            if index.fingerprint() == fingerprint {
                return Arc::clone(index);
            }
        }

        // Build without holding the lock; readers keep using the old snapshot
        let built = Arc::new(self.ranker.index(catalog));

        let mut slot = self.index.write();
        if let Some(existing) = slot.as_ref() {
            if existing.fingerprint() == fingerprint {
                return Arc::clone(existing);
            }
        }
        debug!(fingerprint, "tf-idf index cached");
        *slot = Some(Arc::clone(&built));
        built
    }

    /// Same contract and output as [`SimilarityRanker::recommend`]
    pub fn recommend(
        &self,
        catalog: &Catalog,
        query_title: &str,
        top_n: usize,
    ) -> Result<RankedResult> {
        ensure_top_n(top_n)?;
        let query = catalog.position(query_title)?;
        let index = self.index_for(catalog);
        Ok(rank_neighbours(catalog, &index, query, top_n))
    }

    pub fn explain(
        &self,
        catalog: &Catalog,
        query_title: &str,
        candidate_title: &str,
    ) -> Result<Explanation> {
        let query = catalog.position(query_title)?;
        let candidate = catalog.position(candidate_title)?;
        let index = self.index_for(catalog);
        Ok(Explanation::compute(catalog, &index, query, candidate))
    }

    /// Drop the cached index
    pub fn clear(&self) {
        *self.index.write() = None;
    }
}
