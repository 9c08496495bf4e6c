//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use havarot_api::Syllable;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    words: Vec<WordData>,
}

/// One word in the JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// The normalized word text
    pub text: String,
    /// Syllables in order
    pub syllables: Vec<SyllableData>,
}

/// One syllable in the JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SyllableData {
    pub text: String,
    pub is_closed: bool,
    pub is_accented: bool,
    pub is_final: bool,
}

impl From<&Syllable> for SyllableData {
    fn from(syllable: &Syllable) -> Self {
        Self {
            text: syllable.text(),
            is_closed: syllable.is_closed(),
            is_accented: syllable.is_accented(),
            is_final: syllable.is_final(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            words: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()> {
        self.words.push(WordData {
            text: word.to_string(),
            syllables: syllables.iter().map(SyllableData::from).collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
