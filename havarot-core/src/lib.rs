//! Syllabification engine for vowel-pointed Biblical Hebrew
//!
//! The crate decomposes a normalized, pointed Hebrew word into a hierarchy of
//! characters, clusters and syllables, and resolves each syllable's closed,
//! accented and final status under a configurable set of grammatical
//! conventions ([`SylOpts`]).
//!
//! # Architecture
//!
//! - [`chars`]: code point classification and the symbolic name tables
//! - [`cluster`]: consonant + marks units and their orthographic predicates
//! - [`chain`]: index-arena sequencing with predecessor/successor lookups
//! - [`syllabifier`]: the grouping passes and the annotator
//!
//! Text preprocessing (normalization, word splitting, qamets qatan patterns)
//! lives in `havarot-api`.
//!
//! # Example
//!
//! ```rust
//! use havarot_core::{SylOpts, Syllabifier};
//!
//! let syllabifier = Syllabifier::new(SylOpts::default());
//! // דָּבָר
//! let syllables = syllabifier
//!     .syllabify_word("\u{05D3}\u{05BC}\u{05B8}\u{05D1}\u{05B8}\u{05E8}")
//!     .unwrap();
//!
//! assert_eq!(syllables.len(), 2);
//! assert!(syllables[1].is_accented());
//! assert!(syllables[1].is_closed());
//! ```

pub mod chain;
pub mod chars;
pub mod cluster;
pub mod error;
pub mod options;
pub mod syllabifier;
pub mod syllable;

pub use chain::{Chain, Link, Node};
pub use chars::{Char, CharCategory, ConsonantName, NameKind, TaamName, VowelName};
pub use cluster::{split_clusters, Cluster};
pub use error::{CoreError, Result, ViolationKind};
pub use options::{HolemHaser, SylOpts};
pub use syllabifier::Syllabifier;
pub use syllable::{Syllable, SyllableStructure};
