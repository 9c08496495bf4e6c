//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use havarot_api::Syllable;
use std::io::Write;

/// Markdown formatter - outputs a syllable table per word
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        ""
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()> {
        self.word_count += 1;
        writeln!(self.writer, "### {}. {}", self.word_count, word)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Syllable | Closed | Accented | Final |")?;
        writeln!(self.writer, "|---|----------|--------|----------|-------|")?;
        for (i, syl) in syllables.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                i + 1,
                syl.text(),
                mark(syl.is_closed()),
                mark(syl.is_accented()),
                mark(syl.is_final())
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
