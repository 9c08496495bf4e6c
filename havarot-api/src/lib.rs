//! Public API for syllabifying vowel-pointed Biblical Hebrew
//!
//! This crate wraps the `havarot-core` engine with text preprocessing and a
//! loosely-typed configuration layer.
//!
//! # Example
//!
//! ```rust
//! use havarot_api::{Config, Text};
//!
//! let config = Config::builder().set("sqnmlvy", "false").unwrap().build().unwrap();
//! let text = Text::with_config("וַיְצַחֵק", config).unwrap();
//! let syllables = text.syllables().unwrap();
//! assert_eq!(syllables.len(), 3);
//! assert!(syllables[0].is_closed());
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod qamets_qatan;
pub mod text;
pub mod word;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use havarot_core::{
    Char, CharCategory, Cluster, ConsonantName, CoreError, HolemHaser, NameKind, SylOpts,
    Syllable, SyllableStructure, TaamName, ViolationKind, VowelName,
};
pub use text::Text;
pub use word::Word;

/// Syllabify text with the default configuration
pub fn syllabify(text: &str) -> Result<Vec<Vec<Syllable>>> {
    Text::new(text)?.syllabify()
}

/// Syllabify text with a specific configuration
pub fn syllabify_with_config(text: &str, config: Config) -> Result<Vec<Vec<Syllable>>> {
    Text::with_config(text, config)?.syllabify()
}
