use crate::error::Error;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which suffix-stripping algorithm the normalizer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Paice/Husk rule-table stemmer; strips aggressively.
    #[default]
    Lancaster,
    /// Snowball English (Porter2).
    Snowball,
}

impl FromStr for StemmerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lancaster" => Ok(StemmerKind::Lancaster),
            "snowball" | "porter" => Ok(StemmerKind::Snowball),
            other => Err(Error::Config(format!("unknown stemmer '{other}'"))),
        }
    }
}

impl fmt::Display for StemmerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StemmerKind::Lancaster => f.write_str("lancaster"),
            StemmerKind::Snowball => f.write_str("snowball"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of most frequent terms excluded from the index.
    pub stop_word_count: usize,
    /// Re-select stop words on every refresh instead of keeping the set chosen at open.
    pub recompute_stop_words_on_refresh: bool,
    pub stemmer: StemmerKind,
    /// Optional `form<TAB>lemma` file extending the built-in lemma table.
    pub lemma_dictionary: Option<PathBuf>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            stop_word_count: 20,
            recompute_stop_words_on_refresh: false,
            stemmer: StemmerKind::default(),
            lemma_dictionary: None,
        }
    }
}

/// Where and how to read the source collection.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub path: PathBuf,
    /// Maximum number of data rows to read.
    pub limit: usize,
    pub title_column: usize,
    pub plot_column: usize,
    pub delimiter: u8,
}

impl ImportOptions {
    pub fn new<P: Into<PathBuf>>(path: P, limit: usize) -> Self {
        Self { path: path.into(), limit, title_column: 0, plot_column: 1, delimiter: b',' }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_stop_words_frozen() {
        let cfg = IndexConfig::default();
        assert!(!cfg.recompute_stop_words_on_refresh);
        assert_eq!(cfg.stemmer, StemmerKind::Lancaster);
        assert!(cfg.lemma_dictionary.is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: IndexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.stop_word_count, 20);
        assert!(!cfg.recompute_stop_words_on_refresh);

        let cfg: IndexConfig = serde_json::from_str(r#"{"stemmer": "snowball", "stop_word_count": 15}"#).unwrap();
        assert_eq!(cfg.stemmer, StemmerKind::Snowball);
        assert_eq!(cfg.stop_word_count, 15);
        assert_eq!(cfg.lemma_dictionary, None);
    }

    #[test]
    fn parses_stemmer_names() {
        assert_eq!("Lancaster".parse::<StemmerKind>().unwrap(), StemmerKind::Lancaster);
        assert_eq!("porter".parse::<StemmerKind>().unwrap(), StemmerKind::Snowball);
        assert!("lovins".parse::<StemmerKind>().is_err());
    }

    #[test]
    fn import_defaults_to_first_two_columns() {
        let opts = ImportOptions::new("train.csv", 100);
        assert_eq!((opts.title_column, opts.plot_column, opts.delimiter), (0, 1, b','));
    }
}
