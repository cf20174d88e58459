//! Canonical document collection plus the structures derived from it.

use crate::config::IndexConfig;
use crate::error::{Error, Result};
use crate::index::{build_index, PositionalIndex, TermPostings};
use crate::normalizer::Normalizer;
use crate::stopwords::{select_stop_words, StopWordSet};
use crate::{DocId, Document, NormalizedDocs};
use std::collections::BTreeMap;
use std::time::Instant;

/// Owns the documents and keeps the normalized sequences and positional index in step with them.
///
/// Every successful `insert` or `remove` runs [`DocumentStore::refresh`], which rebuilds
/// both derived structures from the full collection. Stop words are chosen once, in
/// [`DocumentStore::open`], unless `recompute_stop_words_on_refresh` is set.
#[derive(Debug)]
pub struct DocumentStore {
    config: IndexConfig,
    normalizer: Normalizer,
    documents: BTreeMap<DocId, Document>,
    /// Next id to hand out; never decreases, so ids are not reused.
    next_id: DocId,
    normalized: NormalizedDocs,
    stop_words: StopWordSet,
    index: PositionalIndex,
}

impl DocumentStore {
    /// Load the initial collection (ids 1, 2, ... in order), select stop words and build the index.
    pub fn open<I>(documents: I, config: IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let normalizer = Normalizer::from_config(&config)?;
        Self::with_normalizer(documents, config, normalizer)
    }

    pub fn with_normalizer<I>(documents: I, config: IndexConfig, normalizer: Normalizer) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let documents: BTreeMap<DocId, Document> = (1..).zip(documents).collect();
        let next_id = documents.keys().next_back().map_or(1, |max| max + 1);
        let normalized = normalizer.normalize_all(&documents)?;
        tracing::info!(documents = documents.len(), "normalized collection");
        let stop_words = select_stop_words(&normalized, config.stop_word_count);
        let index = build_index(&normalized, &stop_words)?;
        tracing::info!(terms = index.len(), "built positional index");
        Ok(Self { config, normalizer, documents, next_id, normalized, stop_words, index })
    }

    /// Rebuild the normalized sequences and the index from the current documents.
    ///
    /// Nothing is replaced unless both rebuilds succeed.
    pub fn refresh(&mut self) -> Result<()> {
        let started = Instant::now();
        let normalized = self.normalizer.normalize_all(&self.documents)?;
        let stop_words = self
            .config
            .recompute_stop_words_on_refresh
            .then(|| select_stop_words(&normalized, self.config.stop_word_count));
        let index = build_index(&normalized, stop_words.as_ref().unwrap_or(&self.stop_words))?;

        self.normalized = normalized;
        if let Some(stop_words) = stop_words {
            self.stop_words = stop_words;
        }
        self.index = index;
        tracing::info!(
            documents = self.documents.len(),
            terms = self.index.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "refreshed index"
        );
        Ok(())
    }

    /// Add a document and refresh. On a failed refresh the document is taken back out.
    pub fn insert(&mut self, title: impl Into<String>, plot: impl Into<String>) -> Result<DocId> {
        let doc_id = self.next_id;
        let following = doc_id
            .checked_add(1)
            .ok_or_else(|| Error::IndexBuild("document id space exhausted".into()))?;
        self.documents.insert(doc_id, Document::new(title, plot));
        if let Err(err) = self.refresh() {
            self.documents.remove(&doc_id);
            return Err(err);
        }
        self.next_id = following;
        tracing::debug!(doc_id, "inserted document");
        Ok(doc_id)
    }

    /// Remove a document and refresh. Unknown ids leave everything untouched.
    pub fn remove(&mut self, doc_id: DocId) -> Result<Document> {
        let doc = self.documents.remove(&doc_id).ok_or(Error::DocumentNotFound(doc_id))?;
        if let Err(err) = self.refresh() {
            self.documents.insert(doc_id, doc);
            return Err(err);
        }
        tracing::debug!(doc_id, "removed document");
        Ok(doc)
    }

    pub fn get(&self, doc_id: DocId) -> Result<&Document> {
        self.documents.get(&doc_id).ok_or(Error::DocumentNotFound(doc_id))
    }

    pub fn all(&self) -> &BTreeMap<DocId, Document> { &self.documents }

    pub fn normalized(&self, doc_id: DocId) -> Result<&[String]> {
        self.normalized.get(&doc_id).map(Vec::as_slice).ok_or(Error::DocumentNotFound(doc_id))
    }

    pub fn all_normalized(&self) -> &NormalizedDocs { &self.normalized }

    /// Postings for an already-normalized term.
    pub fn term(&self, term: &str) -> Result<&TermPostings> {
        self.index.get(term).ok_or_else(|| Error::TermNotFound(term.to_string()))
    }

    pub fn index(&self) -> &PositionalIndex { &self.index }

    pub fn stop_words(&self) -> &StopWordSet { &self.stop_words }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DocumentStore {
        let docs = vec![Document::new("The Cat Sat", "on the mat"), Document::new("The Dog Ran", "in the park")];
        DocumentStore::open(docs, IndexConfig { stop_word_count: 1, ..IndexConfig::default() }).unwrap()
    }

    #[test]
    fn assigns_sequential_ids_on_open() {
        let store = store();
        assert_eq!(store.all().keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(store.get(2).unwrap().title, "The Dog Ran");
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = store();
        let id = store.insert("Bird", "flew away").unwrap();
        assert_eq!(id, 3);
        store.remove(id).unwrap();
        assert_eq!(store.insert("Fish", "swam home").unwrap(), 4);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = DocumentStore::open(Vec::new(), IndexConfig::default()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.insert("First", "entry").unwrap(), 1);
    }
}
