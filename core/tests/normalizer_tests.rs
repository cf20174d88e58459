use plotdex_core::normalizer::Normalizer;
use plotdex_core::{IndexConfig, StemmerKind};

fn normalizer(stemmer: StemmerKind) -> Normalizer {
    Normalizer::from_config(&IndexConfig { stemmer, ..IndexConfig::default() }).unwrap()
}

#[test]
fn it_folds_strips_and_stems() {
    let toks = normalizer(StemmerKind::Lancaster).normalize("Running, RUNNING! running?").unwrap();
    assert_eq!(toks, vec!["run", "run", "run"]);
}

#[test]
fn it_is_deterministic() {
    let n = normalizer(StemmerKind::Lancaster);
    let text = "A Presumably HAPPY ending: the café's maximum (re)opening.";
    let first = n.normalize(text).unwrap();
    for _ in 0..5 {
        assert_eq!(n.normalize(text).unwrap(), first);
    }
}

#[test]
fn it_composes_before_folding() {
    let n = normalizer(StemmerKind::Lancaster);
    // decomposed "e" + combining acute vs precomposed "é"
    assert_eq!(n.normalize("Cafe\u{301}").unwrap(), n.normalize("CAF\u{c9}").unwrap());
}

#[test]
fn snowball_is_gentler() {
    let toks = normalizer(StemmerKind::Snowball).normalize("Runners presumably running").unwrap();
    assert_eq!(toks, vec!["runner", "presum", "run"]);
}

#[test]
fn lemma_dictionary_is_applied_after_stemming() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lemmas.tsv");
    std::fs::write(&path, "ran\trun\n").unwrap();
    let n = Normalizer::from_config(&IndexConfig { lemma_dictionary: Some(path), ..IndexConfig::default() }).unwrap();
    assert_eq!(n.normalize("He ran").unwrap(), vec!["he", "run"]);
}

#[test]
fn missing_lemma_dictionary_is_a_config_error() {
    let cfg = IndexConfig { lemma_dictionary: Some("/nonexistent/lemmas.tsv".into()), ..IndexConfig::default() };
    let err = Normalizer::from_config(&cfg).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn curly_quotes_do_not_stick_to_words() {
    let toks = normalizer(StemmerKind::Lancaster).normalize("He whispered “Rosebud”").unwrap();
    assert!(toks.contains(&"rosebud".to_string()));
    assert_eq!(toks[toks.len() - 3..], ["“", "rosebud", "”"]);
}

#[test]
fn curly_apostrophe_splits_the_possessive() {
    let toks = normalizer(StemmerKind::Lancaster).normalize("the dog’s sled").unwrap();
    assert_eq!(toks, vec!["the", "dog", "’", "s", "sled"]);
}

#[test]
fn em_dash_is_kept_as_its_own_token() {
    let toks = normalizer(StemmerKind::Lancaster).normalize("cat — dog").unwrap();
    assert_eq!(toks, vec!["cat", "—", "dog"]);
}

#[test]
fn ellipsis_is_expanded_then_stripped() {
    // NFKC turns "…" into "...", which the ASCII punctuation pass removes
    let toks = normalizer(StemmerKind::Lancaster).normalize("wait… what").unwrap();
    assert_eq!(toks, vec!["wait", "what"]);
}
