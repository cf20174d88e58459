//! Dictionary-backed noun lemmatizer in the style of WordNet's morphy.
//!
//! Irregular forms come from an exception table; regular plurals are undone by
//! suffix detachment, but a detached candidate is only accepted when it is a
//! known lemma. Anything else is returned unchanged.

use crate::error::{Error, Result};
use crate::normalizer::Lemmatize;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

lazy_static! {
    static ref IRREGULAR_NOUNS: Vec<(&'static str, &'static str)> = vec![
        ("alumni", "alumnus"), ("analyses", "analysis"), ("bacteria", "bacterium"), ("bases", "basis"),
        ("brethren", "brother"), ("cacti", "cactus"), ("children", "child"), ("corpora", "corpus"),
        ("crises", "crisis"), ("criteria", "criterion"), ("data", "datum"), ("diagnoses", "diagnosis"),
        ("dice", "die"), ("dwarves", "dwarf"), ("elves", "elf"), ("feet", "foot"), ("fungi", "fungus"),
        ("geese", "goose"), ("genera", "genus"), ("halves", "half"), ("hooves", "hoof"),
        ("hypotheses", "hypothesis"), ("indices", "index"), ("knives", "knife"), ("larvae", "larva"),
        ("leaves", "leaf"), ("lice", "louse"), ("lives", "life"), ("loaves", "loaf"),
        ("matrices", "matrix"), ("media", "medium"), ("memoranda", "memorandum"), ("men", "man"),
        ("mice", "mouse"), ("nuclei", "nucleus"), ("oases", "oasis"), ("oxen", "ox"),
        ("phenomena", "phenomenon"), ("radii", "radius"), ("scarves", "scarf"), ("selves", "self"),
        ("stimuli", "stimulus"), ("strata", "stratum"), ("syllabi", "syllabus"), ("teeth", "tooth"),
        ("theses", "thesis"), ("thieves", "thief"), ("vertices", "vertex"), ("wharves", "wharf"),
        ("wives", "wife"), ("wolves", "wolf"), ("women", "woman"),
    ];
}

/// Noun detachment rules, tried in order: (suffix, replacement).
const DETACHMENTS: &[(&str, &str)] = &[
    ("s", ""), ("ses", "s"), ("xes", "x"), ("zes", "z"), ("ches", "ch"), ("shes", "sh"), ("men", "man"), ("ies", "y"),
];

#[derive(Debug, Clone)]
pub struct MorphyLemmatizer {
    exceptions: HashMap<String, String>,
    lemmas: HashSet<String>,
}

impl Default for MorphyLemmatizer {
    fn default() -> Self {
        let exceptions: HashMap<String, String> =
            IRREGULAR_NOUNS.iter().map(|(form, lemma)| (form.to_string(), lemma.to_string())).collect();
        let lemmas = exceptions.values().cloned().collect();
        Self { exceptions, lemmas }
    }
}

impl MorphyLemmatizer {
    pub fn new() -> Self { Self::default() }

    /// Built-in table extended with a dictionary file.
    ///
    /// Each non-empty line is either `form<TAB>lemma` or a bare `lemma`; `#` starts a comment line.
    pub fn with_dictionary<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read lemma dictionary {}: {e}", path.display())))?;
        let mut lemmatizer = Self::default();
        lemmatizer.extend_from_str(&text)?;
        tracing::debug!(path = %path.display(), lemmas = lemmatizer.lemmas.len(), "loaded lemma dictionary");
        Ok(lemmatizer)
    }

    pub fn extend_from_str(&mut self, text: &str) -> Result<()> {
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            match fields.as_slice() {
                [lemma] => { self.lemmas.insert(lemma.to_lowercase()); }
                [form, lemma] if !form.is_empty() && !lemma.is_empty() => {
                    self.exceptions.insert(form.to_lowercase(), lemma.to_lowercase());
                    self.lemmas.insert(lemma.to_lowercase());
                }
                _ => return Err(Error::Config(format!("lemma dictionary line {}: expected 1 or 2 tab-separated fields", lineno + 1))),
            }
        }
        Ok(())
    }

    pub fn lemma(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) { return lemma.clone(); }
        if self.lemmas.contains(word) { return word.to_string(); }
        DETACHMENTS
            .iter()
            .filter_map(|(suffix, replacement)| {
                word.strip_suffix(suffix).map(|stem| format!("{stem}{replacement}"))
            })
            .filter(|candidate| !candidate.is_empty() && self.lemmas.contains(candidate))
            .min_by_key(|candidate| candidate.len())
            .unwrap_or_else(|| word.to_string())
    }
}

impl Lemmatize for MorphyLemmatizer {
    fn lemmatize(&self, token: &str) -> Result<String> { Ok(self.lemma(token)) }
}
