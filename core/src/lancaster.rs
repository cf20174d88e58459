//! Paice/Husk ("Lancaster") stemmer.
//!
//! Rules are written in the compact Paice notation: the ending reversed, an
//! optional `*` (fire only on the untouched word), the number of characters to
//! remove, an optional string to append, and `>` (keep stemming) or `.` (stop).
//! `"sei3y>"` turns `-ies` into `-y` and continues.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref RULE: Regex = Regex::new(r"^([a-z]+)(\*?)(\d)([a-z]*)([>.]?)$").expect("valid regex");
}

pub const DEFAULT_RULES: &[&str] = &[
    "ai*2.", "a*1.", "bb1.", "city3s.", "ci2>", "cn1t>", "dd1.", "dei3y>", "deec2ss.", "dee1.",
    "de2>", "dooh4>", "e1>", "feil1v.", "fi2>", "gni3>", "gai3y.", "ga2>", "gg1.", "ht*2.",
    "hsiug5ct.", "hsi3>", "i*1.", "i1y>", "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.",
    "jrev1t.", "jsim2t.", "jn1d.", "j1s.", "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>",
    "lc1.", "lufi4y.", "luf3>", "lu2.", "lai3>", "lau3>", "la2>", "ll1.", "mui3.", "mu*2.",
    "msi3>", "mm1.", "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.",
    "pihs4>", "pp1.", "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>",
    "sei3y>", "sis2.", "si2>", "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.", "tacilp4y.",
    "ta2>", "tnem4>", "tne3>", "tna3>", "tpir2b.", "tpro2b.", "tcud1.", "tpmus2.", "tpec2iv.",
    "tulo2v.", "tsis0.", "tsi3>", "tt1.", "uqi3.", "ugo1.", "vis3j>", "vie0.", "vi2>", "ylb1>",
    "yli3y>", "ylp0.", "yl2>", "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>", "yte3>", "ytl2.",
    "yrtsi5.", "yra3>", "yro3>", "yfi3.", "ycn2t>", "yca3>", "zi2>", "zy1s.",
];

#[derive(Debug, Clone)]
struct Rule {
    ending: Vec<char>,
    intact_only: bool,
    remove: usize,
    append: String,
    stop: bool,
}

impl Rule {
    fn parse(text: &str) -> Result<(char, Rule)> {
        let caps = RULE
            .captures(text)
            .ok_or_else(|| Error::Config(format!("malformed stemmer rule '{text}'")))?;
        let reversed = &caps[1];
        let key = reversed.chars().next().ok_or_else(|| Error::Config(format!("empty ending in rule '{text}'")))?;
        let rule = Rule {
            ending: reversed.chars().rev().collect(),
            intact_only: !caps[2].is_empty(),
            remove: caps[3].parse().map_err(|_| Error::Config(format!("bad removal count in rule '{text}'")))?,
            append: caps[4].to_string(),
            stop: &caps[5] == ".",
        };
        Ok((key, rule))
    }
}

#[derive(Debug, Clone)]
pub struct LancasterStemmer {
    /// Rules grouped by the word's final letter, in table order.
    rules: HashMap<char, Vec<Rule>>,
}

impl LancasterStemmer {
    pub fn new() -> Result<Self> { Self::with_rules(DEFAULT_RULES) }

    pub fn with_rules(table: &[&str]) -> Result<Self> {
        let mut rules: HashMap<char, Vec<Rule>> = HashMap::new();
        for text in table {
            let (key, rule) = Rule::parse(text)?;
            rules.entry(key).or_default().push(rule);
        }
        Ok(Self { rules })
    }

    pub fn stem_word(&self, word: &str) -> String {
        let intact: Vec<char> = word.to_lowercase().chars().collect();
        let mut word = intact.clone();
        loop {
            let Some(last) = last_letter(&word) else { break };
            let Some(candidates) = self.rules.get(&word[last]) else { break };
            let mut outcome = None;
            for rule in candidates {
                if !word.ends_with(&rule.ending) { continue; }
                if rule.intact_only && word != intact { continue; }
                if !acceptable(&word, rule.remove) { continue; }
                word.truncate(word.len() - rule.remove);
                word.extend(rule.append.chars());
                outcome = Some(rule.stop);
                break;
            }
            // no rule fired, or the rule that fired ends stemming
            if outcome != Some(false) { break; }
        }
        word.into_iter().collect()
    }
}

fn is_vowel(c: char) -> bool { matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y') }

/// Index of the last letter of the word's leading alphabetic run.
fn last_letter(word: &[char]) -> Option<usize> {
    word.iter().take_while(|c| c.is_alphabetic()).count().checked_sub(1)
}

/// A stem must keep two letters if it starts with a vowel, otherwise three with a vowel among the first three.
fn acceptable(word: &[char], remove: usize) -> bool {
    let Some(keep) = word.len().checked_sub(remove) else { return false };
    match word.first() {
        Some(&c) if is_vowel(c) => keep >= 2,
        Some(_) => keep >= 3 && (is_vowel(word[1]) || is_vowel(word[2])),
        None => false,
    }
}
