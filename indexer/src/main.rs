mod menu;

use anyhow::{bail, Context, Result};
use clap::Parser;
use plotdex_core::corpus;
use plotdex_core::{DocumentStore, ImportOptions, IndexConfig, StemmerKind};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "plotdex")]
#[command(about = "Build and browse a positional index over a CSV of titles and plots", long_about = None)]
struct Cli {
    /// CSV file to import; the first row is a header
    #[arg(long, env = "PLOTDEX_INPUT", default_value = "train.csv")]
    input: PathBuf,
    /// Number of documents to import
    #[arg(long, env = "PLOTDEX_DOCUMENTS", default_value_t = 1000, value_parser = clap::value_parser!(u16).range(50..=6000))]
    documents: u16,
    /// Number of most frequent terms left out of the index
    #[arg(long, env = "PLOTDEX_STOP_WORDS", default_value_t = 20, value_parser = clap::value_parser!(u8).range(10..=50))]
    stop_words: u8,
    /// Re-select stop words after every insert or delete
    #[arg(long, env = "PLOTDEX_RECOMPUTE_STOP_WORDS", default_value_t = false)]
    recompute_stop_words: bool,
    /// Stemming algorithm: lancaster or snowball
    #[arg(long, env = "PLOTDEX_STEMMER", default_value_t = StemmerKind::Lancaster)]
    stemmer: StemmerKind,
    /// Extra lemmas, one `form<TAB>lemma` or bare `lemma` per line
    #[arg(long, env = "PLOTDEX_LEMMA_DICTIONARY")]
    lemma_dictionary: Option<PathBuf>,
    /// Zero-based column holding the title
    #[arg(long, default_value_t = 0)]
    title_column: usize,
    /// Zero-based column holding the plot
    #[arg(long, default_value_t = 1)]
    plot_column: usize,
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

impl Cli {
    fn import_options(&self) -> Result<ImportOptions> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        Ok(ImportOptions {
            path: self.input.clone(),
            limit: self.documents as usize,
            title_column: self.title_column,
            plot_column: self.plot_column,
            delimiter: self.delimiter as u8,
        })
    }

    fn index_config(&self) -> IndexConfig {
        IndexConfig {
            stop_word_count: self.stop_words as usize,
            recompute_stop_words_on_refresh: self.recompute_stop_words,
            stemmer: self.stemmer,
            lemma_dictionary: self.lemma_dictionary.clone(),
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let documents = corpus::import(&cli.import_options()?).context("documents loading failed")?;
    let mut store = DocumentStore::open(documents, cli.index_config()).context("building the index failed")?;
    tracing::info!(
        documents = store.len(),
        terms = store.index().len(),
        stop_words = store.stop_words().len(),
        "ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut store, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
