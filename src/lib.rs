//! # tastebud
//!
//! A small content-based recommendation engine over an in-memory catalog.
//!
//! Given items with a short free-text descriptor and a quality score, tastebud
//! answers two questions:
//!
//! - **"More like this"**: rank the other items by TF-IDF cosine similarity of
//!   their descriptors to a chosen item
//! - **"Top items"**: rank the whole catalog by score
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! tastebud recommend "Inception" --top-n 3
//! tastebud top-rated
//! tastebud --catalog movies.json recommend "Heat" --explain
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use tastebud::prelude::*;
//!
//! let catalog = tastebud::sample::movies().unwrap();
//!
//! let similar = recommend(&catalog, "Inception", 1).unwrap();
//! assert_eq!(similar.titles(), vec!["The Matrix"]);
//!
//! let best = top_rated(&catalog, 1).unwrap();
//! assert_eq!(best.titles(), vec!["The Shawshank Redemption"]);
//! ```
//!
//! ## Crate Structure
//!
//! - [`tastebud-core`](https://docs.rs/tastebud-core) - Items, catalog, tokenizer, sparse vectors
//! - [`tastebud-ranking`](https://docs.rs/tastebud-ranking) - TF-IDF similarity, score ranking, explanations

pub mod sample;

// Re-export core types
pub use tastebud_core::{
    Catalog, Item, SparseVector,
    StopWords, TextConfig, Tokenizer,
    Error, Result,
};

// Re-export ranking
pub use tastebud_ranking::{
    recommend, top_rated, top_rated_for,
    CachedSimilarityRanker, SimilarityRanker, TfidfIndex,
    Explanation, TermContribution,
    RankedItem, RankedResult, Recommendation, TopRatedEntry,
    UserPreferences, DEFAULT_TOP_N,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Item, TextConfig, StopWords,
        recommend, top_rated,
        SimilarityRanker, CachedSimilarityRanker,
        RankedResult, Recommendation, TopRatedEntry,
        Error, Result, DEFAULT_TOP_N,
    };
}
