//! Text normalization: case folding, punctuation removal, tokenization, stemming, lemmatization.

use crate::config::{IndexConfig, StemmerKind};
use crate::error::{Error, Result};
use crate::lancaster::LancasterStemmer;
use crate::lemmatizer::MorphyLemmatizer;
use crate::{DocId, Document, NormalizedDocs};
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::BTreeMap;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // typographic quotes split off as tokens of their own
    static ref TOKEN: Regex = Regex::new(r"[«“‘„»”’]|[^\s«“‘„»”’]+").expect("valid regex");
}

/// ASCII punctuation removed before tokenizing.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Suffix-stripping stage.
pub trait Stem: Send + Sync {
    fn stem(&self, token: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// Lemma lookup stage; returns the input unchanged when it knows no lemma.
pub trait Lemmatize: Send + Sync {
    fn lemmatize(&self, token: &str) -> Result<String>;
}

impl Stem for LancasterStemmer {
    fn stem(&self, token: &str) -> Result<String> { Ok(self.stem_word(token)) }

    fn name(&self) -> &'static str { "lancaster" }
}

pub struct SnowballStemmer(Stemmer);

impl Default for SnowballStemmer {
    fn default() -> Self { Self(Stemmer::create(Algorithm::English)) }
}

impl Stem for SnowballStemmer {
    fn stem(&self, token: &str) -> Result<String> { Ok(self.0.stem(token).into_owned()) }

    fn name(&self) -> &'static str { "snowball" }
}

pub struct Normalizer {
    stemmer: Box<dyn Stem>,
    lemmatizer: Box<dyn Lemmatize>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer").field("stemmer", &self.stemmer.name()).finish_non_exhaustive()
    }
}

impl Normalizer {
    pub fn new(stemmer: Box<dyn Stem>, lemmatizer: Box<dyn Lemmatize>) -> Self {
        Self { stemmer, lemmatizer }
    }

    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        let stemmer: Box<dyn Stem> = match config.stemmer {
            StemmerKind::Lancaster => Box::new(LancasterStemmer::new()?),
            StemmerKind::Snowball => Box::new(SnowballStemmer::default()),
        };
        let lemmatizer = match &config.lemma_dictionary {
            Some(path) => MorphyLemmatizer::with_dictionary(path)?,
            None => MorphyLemmatizer::new(),
        };
        Ok(Self::new(stemmer, Box::new(lemmatizer)))
    }

    /// The text indexed for a document: title, a space, then plot.
    pub fn document_text(doc: &Document) -> String {
        format!("{} {}", doc.title, doc.plot)
    }

    /// Run the full pipeline; the index of each returned token is its position.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        let folded = case_fold(text);
        let stripped = strip_punctuation(&folded);
        let mut tokens = Vec::new();
        for token in tokenize(&stripped) {
            let stemmed = self.stemmer.stem(token)?;
            let lemma = self.lemmatizer.lemmatize(&stemmed)?;
            if !lemma.is_empty() {
                tokens.push(lemma);
            }
        }
        Ok(tokens)
    }

    pub fn normalize_document(&self, doc_id: DocId, doc: &Document) -> Result<Vec<String>> {
        self.normalize(&Self::document_text(doc))
            .map_err(|e| Error::Normalization { doc_id, reason: e.to_string() })
    }

    /// Normalize every document, stopping at the first failure.
    pub fn normalize_all(&self, docs: &BTreeMap<DocId, Document>) -> Result<NormalizedDocs> {
        docs.iter()
            .map(|(&doc_id, doc)| -> Result<(DocId, Vec<String>)> {
                let tokens = self.normalize_document(doc_id, doc)?;
                tracing::trace!(doc_id, tokens = tokens.len(), "normalized document");
                Ok((doc_id, tokens))
            })
            .collect()
    }
}

/// NFKC-compose and lower-case, folding `ß` to `ss`.
pub fn case_fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase().replace('ß', "ss")
}

pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(*c)).collect()
}

pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN.find_iter(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStemmer;

    impl Stem for FailingStemmer {
        fn stem(&self, token: &str) -> Result<String> {
            if token == "boom" { Err(Error::Config("stemmer exploded".into())) } else { Ok(token.to_string()) }
        }

        fn name(&self) -> &'static str { "failing" }
    }

    fn lancaster() -> Normalizer {
        Normalizer::from_config(&IndexConfig::default()).unwrap()
    }

    #[test]
    fn folds_case_and_strips_punctuation() {
        assert_eq!(case_fold("The CAT Straße"), "the cat strasse");
        assert_eq!(strip_punctuation("don't-stop, (now)!"), "dontstop now");
    }

    #[test]
    fn tokenizes_on_whitespace_in_order() {
        let tokens: Vec<&str> = tokenize("  one two\tthree\nfour ").collect();
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn tokenizes_quotes_apart_from_words() {
        let tokens: Vec<&str> = tokenize("“rosebud” dog’s «sled»").collect();
        assert_eq!(tokens, vec!["“", "rosebud", "”", "dog", "’", "s", "«", "sled", "»"]);
    }

    #[test]
    fn full_pipeline() {
        let tokens = lancaster().normalize("The Cat was Running!").unwrap();
        assert_eq!(tokens, vec!["the", "cat", "was", "run"]);
    }

    #[test]
    fn document_text_joins_title_and_plot() {
        let doc = Document::new("The Cat Sat", "on the mat");
        assert_eq!(Normalizer::document_text(&doc), "The Cat Sat on the mat");
    }

    #[test]
    fn stage_failure_names_the_document() {
        let normalizer = Normalizer::new(Box::new(FailingStemmer), Box::new(MorphyLemmatizer::new()));
        let err = normalizer.normalize_document(3, &Document::new("big", "boom")).unwrap_err();
        assert!(matches!(err, Error::Normalization { doc_id: 3, .. }));
    }

    #[test]
    fn punctuation_only_text_yields_no_tokens() {
        assert!(lancaster().normalize("... !!! --").unwrap().is_empty());
    }
}
