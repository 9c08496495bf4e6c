//! Plain text output formatter

use super::{joined, OutputFormatter};
use anyhow::Result;
use havarot_api::Syllable;
use std::io::{self, Write};

/// Plain text formatter - outputs one word per line, syllables separated by `·`
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, _word: &str, syllables: &[Syllable]) -> Result<()> {
        writeln!(self.writer, "{}", joined(syllables))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
