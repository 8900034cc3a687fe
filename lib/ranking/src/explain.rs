//! Explainability for similarity results
//!
//! Breaks a cosine similarity down into per-term contributions so a caller
//! can show *why* two items were judged alike.

use crate::tfidf::TfidfIndex;
use ordered_float::OrderedFloat;
use serde::Serialize;
use tastebud_core::Catalog;

/// Contribution of one shared term to the similarity score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermContribution {
    pub term: String,
    /// Normalized weight in the query item
    pub query_weight: f32,
    /// Normalized weight in the candidate item
    pub candidate_weight: f32,
    /// Share of the cosine similarity; contributions sum to the similarity
    pub contribution: f32,
}

/// Similarity of a candidate to a query, with per-term breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub query: String,
    pub candidate: String,
    pub similarity: f32,
    /// Shared terms, highest contribution first
    pub terms: Vec<TermContribution>,
}

impl Explanation {
    pub(crate) fn compute(
        catalog: &Catalog,
        index: &TfidfIndex,
        query: usize,
        candidate: usize,
    ) -> Self {
        let items = catalog.all_items();
        let similarity = index.similarity(query, candidate);

        let terms = match (index.vector(query), index.vector(candidate)) {
            (Some(q), Some(c)) if !q.is_zero() && !c.is_zero() => {
                let norms = q.norm() * c.norm();
                let mut terms: Vec<TermContribution> = q
                    .iter()
                    .filter_map(|(term_index, query_weight)| {
                        let candidate_weight = c.get(term_index);
                        if candidate_weight == 0.0 {
                            return None;
                        }
                        index.vocabulary().term(term_index).map(|term| TermContribution {
                            term: term.to_string(),
                            query_weight,
                            candidate_weight,
                            contribution: query_weight * candidate_weight / norms,
                        })
                    })
                    .collect();
                terms.sort_by(|a, b| {
                    OrderedFloat(b.contribution).cmp(&OrderedFloat(a.contribution))
                });
                terms
            }
            _ => Vec::new(),
        };

        Self {
            query: items[query].title.clone(),
            candidate: items[candidate].title.clone(),
            similarity,
            terms,
        }
    }

    /// Term that contributed most, if any were shared
    pub fn top_term(&self) -> Option<&str> {
        self.terms.first().map(|t| t.term.as_str())
    }
}
