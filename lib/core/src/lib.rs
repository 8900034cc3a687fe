//! # tastebud Core
//!
//! Core library for the tastebud recommendation engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`Item`] - A titled catalog entry with a descriptor and a quality score
//! - [`Catalog`] - Immutable, insertion-ordered item store with title lookup
//! - [`Tokenizer`] / [`TextConfig`] - Descriptor tokenization and stop words
//! - [`SparseVector`] - Sparse term-weight vectors with cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use tastebud_core::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Inception", "Sci-Fi, Action", 8.8),
//!     Item::new("The Dark Knight", "Action, Crime, Drama", 9.0),
//! ]).unwrap();
//!
//! let item = catalog.find_by_title("Inception").unwrap();
//! assert_eq!(item.score, 8.8);
//! assert!(catalog.find_by_title("Heat").is_err());
//! ```

pub mod catalog;
pub mod error;
pub mod item;
pub mod stopwords;
pub mod text;
pub mod vector;

pub use catalog::Catalog;
pub use error::{ensure_top_n, Error, Result};
pub use item::Item;
pub use stopwords::ENGLISH_STOP_WORDS;
pub use text::{StopWords, TextConfig, Tokenizer};
pub use vector::SparseVector;
