//! Line-oriented menu over a [`DocumentStore`].

use anyhow::{Context, Result};
use plotdex_core::DocumentStore;
use serde::Serialize;
use std::io::{BufRead, Write};

const MENU: &[&str] = &[
    "1 -> show a document",
    "2 -> show all documents",
    "3 -> add new document",
    "4 -> delete a document",
    "5 -> show a term positional index",
    "6 -> show all terms positional index",
    "7 -> show a document preprocessing",
    "8 -> show all documents preprocessing",
    "9 -> show stop-words",
    "10 -> quit",
];

pub struct Menu<'a, R, W> {
    store: &'a mut DocumentStore,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut DocumentStore, input: R, out: W) -> Self {
        Self { store, input, out }
    }

    /// Serve commands until quit, end of input, or a failed refresh.
    pub fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            for line in MENU {
                writeln!(self.out, "{line}")?;
            }
            // anything that is not a number quits, like end of input
            let Some(choice) = self.prompt_number("select from menu")? else { break };
            match choice {
                1 => self.show_document()?,
                2 => self.show_all_documents()?,
                3 => self.add_document()?,
                4 => self.delete_document()?,
                5 => self.show_term()?,
                6 => self.show_all_terms()?,
                7 => self.show_normalized()?,
                8 => self.show_all_normalized()?,
                9 => self.show_stop_words()?,
                0 | 10 => break,
                _ => writeln!(self.out, "wrong number... please select from menu numbers.")?,
            }
        }
        writeln!(self.out, "end.")?;
        Ok(())
    }

    /// `None` on end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{message}: ")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// `None` when the answer is not a non-negative integer.
    fn prompt_number(&mut self, message: &str) -> Result<Option<u32>> {
        Ok(self.prompt(message)?.and_then(|answer| answer.trim().parse().ok()))
    }

    fn show_document(&mut self) -> Result<()> {
        loop {
            let Some(doc_id) = self.prompt_number("enter document id, enter something that is not number to cancel")? else {
                return Ok(writeln!(self.out, "show a document canceled")?);
            };
            match self.store.get(doc_id) {
                Ok(doc) => return Ok(writeln!(self.out, "{}", render(doc)?)?),
                Err(err) if err.is_not_found() => writeln!(self.out, "wrong id")?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn show_all_documents(&mut self) -> Result<()> {
        for (doc_id, doc) in self.store.all() {
            writeln!(self.out, "{doc_id} -> {}", render(doc)?)?;
        }
        Ok(())
    }

    fn add_document(&mut self) -> Result<()> {
        let (title, plot) = loop {
            let Some(title) = self.prompt("enter document title")? else { return Ok(()) };
            let Some(plot) = self.prompt("enter document plot")? else { return Ok(()) };
            if !title.trim().is_empty() && !plot.trim().is_empty() {
                break (title, plot);
            }
            writeln!(self.out, "both fields are required.")?;
        };
        let doc_id = self.store.insert(title, plot).context("refresh after insert failed")?;
        let doc = self.store.get(doc_id)?;
        writeln!(self.out, "document: {} id: {doc_id} inserted", render(doc)?)?;
        Ok(())
    }

    fn delete_document(&mut self) -> Result<()> {
        let Some(doc_id) = self.prompt_number("enter document id")? else {
            return Ok(writeln!(self.out, "document id doesn't exist.")?);
        };
        match self.store.remove(doc_id) {
            Ok(_) => writeln!(self.out, "document {doc_id} was deleted.")?,
            Err(err) if err.is_not_found() => writeln!(self.out, "document id doesn't exist.")?,
            Err(err) => return Err(err).context("refresh after delete failed"),
        }
        Ok(())
    }

    fn show_term(&mut self) -> Result<()> {
        loop {
            let Some(term) = self.prompt("enter a term, enter + to cancel")? else { return Ok(()) };
            if term == "+" {
                return Ok(writeln!(self.out, "show a term canceled")?);
            }
            match self.store.term(&term) {
                Ok(postings) => return Ok(writeln!(self.out, "{term} : {}", render(postings)?)?),
                Err(err) if err.is_not_found() => writeln!(self.out, "wrong term")?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn show_all_terms(&mut self) -> Result<()> {
        for (term, postings) in self.store.index().terms() {
            writeln!(self.out, "{term} -> {}", render(postings)?)?;
        }
        Ok(())
    }

    fn show_normalized(&mut self) -> Result<()> {
        loop {
            let Some(doc_id) = self.prompt_number("enter document id, enter something that is not number to cancel")? else {
                return Ok(writeln!(self.out, "show a document canceled")?);
            };
            match self.store.normalized(doc_id) {
                Ok(tokens) => return Ok(writeln!(self.out, "{}", render(tokens)?)?),
                Err(err) if err.is_not_found() => writeln!(self.out, "wrong id")?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn show_all_normalized(&mut self) -> Result<()> {
        for (doc_id, tokens) in self.store.all_normalized() {
            writeln!(self.out, "{doc_id} -> {}", render(tokens)?)?;
        }
        Ok(())
    }

    fn show_stop_words(&mut self) -> Result<()> {
        for (term, freq) in self.store.stop_words().iter() {
            writeln!(self.out, "{term} -> {freq}")?;
        }
        Ok(())
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
