//! TF-IDF term weighting over a catalog
//!
//! One vocabulary is built over every descriptor in the catalog, so all item
//! vectors share the same dimensions. Vocabulary indices follow lexicographic
//! term order, which keeps floating point accumulation order (and therefore
//! every score) reproducible across runs.

use ahash::AHashMap;
use std::collections::BTreeSet;
use tastebud_core::{Catalog, SparseVector, TextConfig, Tokenizer};
use tracing::debug;

/// Sorted term list with a reverse lookup
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: AHashMap<String, u32>,
}

impl Vocabulary {
    fn from_sorted(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i as u32))
            .collect();
        Self { terms, index }
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    #[inline]
    pub fn term(&self, index: u32) -> Option<&str> {
        self.terms.get(index as usize).map(String::as_str)
    }

    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// L2-normalized TF-IDF vectors for every catalog item, by insertion position
#[derive(Debug, Clone)]
pub struct TfidfIndex {
    vocabulary: Vocabulary,
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
    fingerprint: u64,
}

impl TfidfIndex {
    pub fn build(catalog: &Catalog, config: &TextConfig) -> Self {
        let tokenizer = Tokenizer::new(config);

        // term -> count, per item
        let term_counts: Vec<AHashMap<String, u32>> = catalog
            .iter()
            .map(|item| {
                let mut counts: AHashMap<String, u32> = AHashMap::new();
                for token in tokenizer.tokenize(&item.descriptor) {
                    *counts.entry(token).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // term -> number of items containing it
        let mut doc_freq: AHashMap<&str, u32> = AHashMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let sorted: BTreeSet<&str> = doc_freq.keys().copied().collect();
        let vocabulary = Vocabulary::from_sorted(sorted.into_iter().map(str::to_string).collect());

        let n_docs = catalog.len() as f32;
        let idf: Vec<f32> = vocabulary
            .terms()
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f32;
                inverse_document_frequency(n_docs, df, config.smooth_idf)
            })
            .collect();

        let vectors: Vec<SparseVector> = term_counts
            .iter()
            .map(|counts| {
                let pairs = counts
                    .iter()
                    .filter_map(|(term, &tf)| {
                        vocabulary
                            .index_of(term)
                            .map(|i| (i, tf as f32 * idf[i as usize]))
                    })
                    .collect();
                let mut vector = SparseVector::from_pairs(pairs);
                vector.normalize();
                vector
            })
            .collect();

        debug!(
            items = catalog.len(),
            vocabulary = vocabulary.len(),
            "built tf-idf index"
        );

        Self {
            vocabulary,
            idf,
            vectors,
            fingerprint: catalog.fingerprint(),
        }
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Weight vector of the item at `position`
    #[inline]
    pub fn vector(&self, position: usize) -> Option<&SparseVector> {
        self.vectors.get(position)
    }

    #[inline]
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.index_of(term).map(|i| self.idf[i as usize])
    }

    /// Cosine similarity between two items by position, 0.0 if either is out of range
    pub fn similarity(&self, a: usize, b: usize) -> f32 {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(va), Some(vb)) => va.cosine_similarity(vb),
            _ => 0.0,
        }
    }

    /// Fingerprint of the catalog this index was built from
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

fn inverse_document_frequency(n_docs: f32, df: f32, smooth: bool) -> f32 {
    if smooth {
        ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
    } else if df > 0.0 {
        (n_docs / df).ln() + 1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tastebud_core::{Item, StopWords};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("A", "space,action", 8.8),
            Item::new("B", "action,crime", 9.0),
            Item::new("C", "space,drama", 8.6),
        ])
        .unwrap()
    }

    #[test]
    fn test_vocabulary_sorted() {
        let index = TfidfIndex::build(&catalog(), &TextConfig::default());
        assert_eq!(
            index.vocabulary().terms(),
            &["action", "crime", "drama", "space"]
        );
        assert_eq!(index.vocabulary().index_of("drama"), Some(2));
        assert_eq!(index.vocabulary().term(3), Some("space"));
    }

    #[test]
    fn test_shared_terms_weigh_less() {
        let index = TfidfIndex::build(&catalog(), &TextConfig::default());
        let shared = index.idf("action").unwrap();
        let distinct = index.idf("crime").unwrap();
        assert!(distinct > shared);
        // ln(4/3) + 1 and ln(4/2) + 1
        assert!((shared - 1.287_682).abs() < 1e-5);
        assert!((distinct - 1.693_147).abs() < 1e-5);
    }

    #[test]
    fn test_unsmoothed_idf() {
        let config = TextConfig {
            smooth_idf: false,
            ..TextConfig::default()
        };
        let index = TfidfIndex::build(&catalog(), &config);
        // ln(3/1) + 1
        assert!((index.idf("crime").unwrap() - 2.098_612).abs() < 1e-5);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let index = TfidfIndex::build(&catalog(), &TextConfig::default());
        for vector in index.vectors() {
            assert!((vector.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_term_frequency_raises_weight() {
        let catalog = Catalog::new(vec![
            Item::new("X", "war war peace", 1.0),
            Item::new("Y", "other", 1.0),
        ])
        .unwrap();
        let index = TfidfIndex::build(&catalog, &TextConfig::default());
        let v = index.vector(0).unwrap();
        let war = v.get(index.vocabulary().index_of("war").unwrap());
        let peace = v.get(index.vocabulary().index_of("peace").unwrap());
        assert!(war > peace);
    }

    #[test]
    fn test_stop_word_only_descriptor_is_zero_vector() {
        let catalog = Catalog::new(vec![
            Item::new("X", "the and of", 1.0),
            Item::new("Y", "drama", 1.0),
        ])
        .unwrap();
        let index = TfidfIndex::build(&catalog, &TextConfig::default());
        assert!(index.vector(0).unwrap().is_zero());
        assert_eq!(index.similarity(0, 1), 0.0);

        let keep_all = TextConfig {
            stop_words: StopWords::None,
            ..TextConfig::default()
        };
        let index = TfidfIndex::build(&catalog, &keep_all);
        assert!(!index.vector(0).unwrap().is_zero());
    }

    #[test]
    fn test_similarity_symmetric() {
        let index = TfidfIndex::build(&catalog(), &TextConfig::default());
        assert_eq!(index.similarity(0, 1), index.similarity(1, 0));
        assert_eq!(index.similarity(0, 9), 0.0);
    }
}
