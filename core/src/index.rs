use crate::error::{Error, Result};
use crate::stopwords::StopWordSet;
use crate::{DocId, NormalizedDocs, Position};
use serde::Serialize;
use std::collections::BTreeMap;

/// Occurrences of one term across the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermPostings {
    /// Number of distinct documents containing the term.
    pub doc_freq: u32,
    pub positions: BTreeMap<DocId, Vec<Position>>, // ascending within each document
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PositionalIndex {
    terms: BTreeMap<String, TermPostings>,
}

impl PositionalIndex {
    pub fn get(&self, term: &str) -> Option<&TermPostings> { self.terms.get(term) }

    /// Terms in lexicographic order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &TermPostings)> {
        self.terms.iter().map(|(term, postings)| (term.as_str(), postings))
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Verify that every doc_freq matches its posting count and positions strictly increase.
    pub fn check_invariants(&self) -> Result<()> {
        for (term, postings) in &self.terms {
            if postings.doc_freq as usize != postings.positions.len() {
                return Err(Error::IndexBuild(format!(
                    "term '{term}': doc_freq {} but {} documents",
                    postings.doc_freq,
                    postings.positions.len()
                )));
            }
            for (doc_id, positions) in &postings.positions {
                if positions.is_empty() || positions.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(Error::IndexBuild(format!("term '{term}': bad positions in document {doc_id}")));
                }
            }
        }
        Ok(())
    }
}

/// Build the index from scratch, skipping stop words.
///
/// Positions count every token, stop words included, so they match the
/// normalized sequence.
pub fn build_index(docs: &NormalizedDocs, stop_words: &StopWordSet) -> Result<PositionalIndex> {
    let mut terms: BTreeMap<String, TermPostings> = BTreeMap::new();
    for (&doc_id, tokens) in docs {
        for (pos, token) in tokens.iter().enumerate() {
            if stop_words.contains(token) { continue; }
            let pos = Position::try_from(pos)
                .map_err(|_| Error::IndexBuild(format!("document {doc_id} exceeds {} tokens", Position::MAX)))?;
            let postings = terms.entry(token.clone()).or_default();
            if !postings.positions.contains_key(&doc_id) {
                postings.doc_freq += 1;
            }
            postings.positions.entry(doc_id).or_default().push(pos);
        }
    }
    let index = PositionalIndex { terms };
    debug_assert!(index.check_invariants().is_ok());
    Ok(index)
}
