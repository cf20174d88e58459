//! In-memory positional inverted index over a small title/plot document collection.
//!
//! Documents live in a [`DocumentStore`]; every mutation re-normalizes the whole
//! collection and rebuilds the [`PositionalIndex`] from scratch, filtering the
//! [`StopWordSet`] chosen when the store was opened.

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod lancaster;
pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;
pub mod store;

use serde::Serialize;

pub use config::{ImportOptions, IndexConfig, StemmerKind};
pub use error::{Error, Result};
pub use index::{build_index, PositionalIndex, TermPostings};
pub use normalizer::Normalizer;
pub use stopwords::{select_stop_words, StopWordSet};
pub use store::DocumentStore;

pub type DocId = u32;
pub type Position = u32;

/// Normalized token sequences keyed by document id; a token's index is its position.
pub type NormalizedDocs = std::collections::BTreeMap<DocId, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub plot: String,
}

impl Document {
    pub fn new(title: impl Into<String>, plot: impl Into<String>) -> Self {
        Self { title: title.into(), plot: plot.into() }
    }
}
