use plotdex_core::corpus::import;
use plotdex_core::{DocumentStore, Error, ImportOptions, IndexConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn imports_csv_into_a_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("train.csv");
    let mut csv = String::from("Title,Plot,Genre\n");
    for i in 0..60 {
        csv.push_str(&format!("Movie {i},\"A hero, number {i}, saves the town\",drama\n"));
    }
    fs::write(&path, csv).unwrap();

    let docs = import(&ImportOptions::new(&path, 50)).unwrap();
    assert_eq!(docs.len(), 50);
    assert_eq!(docs[49].title, "Movie 49");

    let store = DocumentStore::open(docs, IndexConfig { stop_word_count: 10, ..IndexConfig::default() }).unwrap();
    assert_eq!(store.len(), 50);
    assert_eq!(store.get(50).unwrap().plot, "A hero, number 49, saves the town");
    store.index().check_invariants().unwrap();
}

#[test]
fn missing_file_is_an_import_failure() {
    let dir = tempdir().unwrap();
    let err = import(&ImportOptions::new(dir.path().join("absent.csv"), 50)).unwrap_err();
    assert!(matches!(err, Error::Import(_)));
    assert!(err.is_fatal());
}
