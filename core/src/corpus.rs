//! CSV import of the source collection.
//!
//! Only the title and plot columns are read; the header row is skipped and
//! every other column is ignored.

use crate::config::ImportOptions;
use crate::error::{Error, Result};
use crate::Document;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;

pub fn import(options: &ImportOptions) -> Result<Vec<Document>> {
    let file = File::open(&options.path)
        .map_err(|e| Error::Import(format!("cannot open {}: {e}", options.path.display())))?;
    let documents = read(file, options)?;
    tracing::info!(path = %options.path.display(), documents = documents.len(), "imported corpus");
    Ok(documents)
}

/// Read at most `options.limit` data rows from any CSV source.
pub fn read<R: Read>(source: R, options: &ImportOptions) -> Result<Vec<Document>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut documents = Vec::new();
    for (row, record) in reader.records().take(options.limit).enumerate() {
        let record = record?;
        // header is line 1
        let line = row + 2;
        let title = column(&record, options.title_column, line)?;
        let plot = column(&record, options.plot_column, line)?;
        documents.push(Document::new(title, plot));
    }
    Ok(documents)
}

fn column(record: &StringRecord, index: usize, line: usize) -> Result<String> {
    record
        .get(index)
        .map(str::to_string)
        .ok_or_else(|| Error::Import(format!("line {line}: missing column {index}")))
}
