//! # tastebud Ranking
//!
//! Ranking over a [`tastebud_core::Catalog`].
//!
//! ## Features
//!
//! - **Similarity ranking**: TF-IDF vectors over item descriptors, cosine
//!   similarity against a query item, query excluded by identity
//! - **Score ranking**: whole-catalog ordering by quality score, no text involved
//! - **Explainability**: per-term contributions to a similarity score
//! - **Index cache**: optional memoized vectorization per catalog fingerprint
//!
//! Both rankers are pure functions of the catalog. Equal relevances always keep
//! catalog insertion order.
//!
//! ## Example
//!
//! ```rust
//! use tastebud_core::{Catalog, Item};
//! use tastebud_ranking::{recommend, top_rated};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("A", "space,action", 8.8),
//!     Item::new("B", "action,crime", 9.0),
//!     Item::new("C", "space,drama", 8.6),
//! ]).unwrap();
//!
//! let similar = recommend(&catalog, "A", 2).unwrap();
//! assert_eq!(similar.titles(), vec!["B", "C"]);
//!
//! let best = top_rated(&catalog, 2).unwrap();
//! assert_eq!(best.titles(), vec!["B", "A"]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│  TfidfIndex │────>│ Similarity  │
//! │   (items)   │     │ (vectorize) │     │   Ranker    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       └─────────────>│ Score Ranker│    ┌─────────────┐
//!                      └─────────────┘    │  Explain    │
//!                                         └─────────────┘
//! ```

pub mod cache;
pub mod explain;
pub mod rank;
pub mod score;
pub mod similarity;
pub mod tfidf;

pub use cache::CachedSimilarityRanker;
pub use explain::{Explanation, TermContribution};
pub use rank::{RankedItem, RankedResult, Recommendation, TopRatedEntry};
pub use score::{top_rated, top_rated_for, UserPreferences};
pub use similarity::{recommend, SimilarityRanker};
pub use tfidf::{TfidfIndex, Vocabulary};

/// Result count used by callers that do not ask for one
pub const DEFAULT_TOP_N: usize = 5;
