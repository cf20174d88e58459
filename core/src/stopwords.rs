use crate::NormalizedDocs;
use serde::Serialize;
use std::collections::HashMap;

/// The most frequent corpus terms with their raw occurrence counts, in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StopWordSet {
    ranked: Vec<(String, u32)>,
    #[serde(skip)]
    lookup: HashMap<String, u32>,
}

impl StopWordSet {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, term: &str) -> bool { self.lookup.contains_key(term) }

    pub fn frequency(&self, term: &str) -> Option<u32> { self.lookup.get(term).copied() }

    /// Entries from most to least frequent.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ranked.iter().map(|(term, freq)| (term.as_str(), *freq))
    }

    pub fn len(&self) -> usize { self.ranked.len() }

    pub fn is_empty(&self) -> bool { self.ranked.is_empty() }
}

impl FromIterator<(String, u32)> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let ranked: Vec<(String, u32)> = iter.into_iter().collect();
        let lookup = ranked.iter().cloned().collect();
        Self { ranked, lookup }
    }
}

/// Pick the `n` terms with the most occurrences across all documents.
///
/// Occurrences are counted per token, not per document. Equal counts keep
/// first-seen order, scanning documents by ascending id.
pub fn select_stop_words(docs: &NormalizedDocs, n: usize) -> StopWordSet {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for tokens in docs.values() {
        for token in tokens {
            let slot = *slots.entry(token.as_str()).or_insert_with(|| {
                counts.push((token.as_str(), 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }
    }
    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let stop_words: StopWordSet = counts.into_iter().take(n).map(|(term, freq)| (term.to_string(), freq)).collect();
    tracing::info!(
        vocabulary = slots.len(),
        selected = stop_words.len(),
        top = stop_words.iter().next().map(|(t, _)| t).unwrap_or(""),
        "selected stop words"
    );
    stop_words
}
