//! Content-based ranking by descriptor similarity

use crate::explain::Explanation;
use crate::rank::{select_top, RankedResult};
use crate::tfidf::TfidfIndex;
use tastebud_core::{ensure_top_n, Catalog, Result, TextConfig};
use tracing::debug;

/// Ranks catalog items by TF-IDF cosine similarity to a query item
#[derive(Debug, Clone, Default)]
pub struct SimilarityRanker {
    config: TextConfig,
}

impl SimilarityRanker {
    /// Create a ranker with the given text options
    pub fn new(config: TextConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Vectorize the whole catalog
    pub fn index(&self, catalog: &Catalog) -> TfidfIndex {
        TfidfIndex::build(catalog, &self.config)
    }

    /// Up to `top_n` items most similar to `query_title`, never including it
    ///
    /// Equal similarities keep catalog order. Fails with `NotFound` for an
    /// unknown title and `InvalidArgument` for `top_n == 0`.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        query_title: &str,
        top_n: usize,
    ) -> Result<RankedResult> {
        ensure_top_n(top_n)?;
        let query = catalog.position(query_title)?;
        let index = self.index(catalog);
        Ok(rank_neighbours(catalog, &index, query, top_n))
    }

    /// Per-term breakdown of how similar `candidate_title` is to `query_title`
    pub fn explain(
        &self,
        catalog: &Catalog,
        query_title: &str,
        candidate_title: &str,
    ) -> Result<Explanation> {
        let query = catalog.position(query_title)?;
        let candidate = catalog.position(candidate_title)?;
        let index = self.index(catalog);
        Ok(Explanation::compute(catalog, &index, query, candidate))
    }
}

/// Rank every item against `query` and drop the query itself by position
pub(crate) fn rank_neighbours(
    catalog: &Catalog,
    index: &TfidfIndex,
    query: usize,
    top_n: usize,
) -> RankedResult {
    let scored: Vec<(usize, f32)> = (0..catalog.len())
        .map(|position| (position, index.similarity(query, position)))
        .collect();

    let result = select_top(catalog, scored, top_n, |position| position != query);
    debug!(query, top_n, returned = result.len(), "similarity ranking");
    result
}

/// [`SimilarityRanker::recommend`] with default text options
pub fn recommend(catalog: &Catalog, query_title: &str, top_n: usize) -> Result<RankedResult> {
    SimilarityRanker::default().recommend(catalog, query_title, top_n)
}
