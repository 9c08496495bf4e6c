//! Output formatting module

use anyhow::Result;
use havarot_api::Syllable;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one word and its syllables
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Separator between syllables in plain output
pub const SYLLABLE_SEPARATOR: char = '\u{00B7}';

/// Syllable texts joined by the separator
pub fn joined(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(Syllable::text)
        .collect::<Vec<_>>()
        .join(&SYLLABLE_SEPARATOR.to_string())
}
