//! Syllabification options
//!
//! [`SylOpts`] is the strict, already-validated record the engine consumes.
//! Turning loosely-typed input into this record is the job of the caller
//! (see `havarot_api::ConfigBuilder`).

use serde::{Deserialize, Serialize};

/// Handling of holam haser for vav (U+05BA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolemHaser {
    /// Leave the text as written
    #[default]
    Keep,
    /// Replace holam haser for vav with a plain holam
    Remove,
    /// Mark a holam on a consonantal vav as holam haser
    PreventPresume,
}

/// Options that select between competing syllabification conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SylOpts {
    /// Sheva after the article with a missing dagesh is vocal
    pub article: bool,
    /// How holam haser for vav is normalized before grouping
    pub holem_haser: HolemHaser,
    /// A long vowel (or mater) closes a following sheva syllable
    pub long_vowels: bool,
    /// Apply the qamets qatan lexical patterns
    pub qamets_qatan: bool,
    /// A sheva after a metheg is vocal
    pub sheva_after_meteg: bool,
    /// Sheva on an undoubled SQNMLVY letter after waw consecutive is vocal
    pub sqnmlvy: bool,
    /// Structural violations are errors instead of best-effort groupings
    pub strict: bool,
    /// A word-initial shureq is its own syllable
    pub waw_shureq: bool,
}

impl SylOpts {
    /// Every convention on, holam haser left as written
    pub const DEFAULT: SylOpts = SylOpts {
        article: true,
        holem_haser: HolemHaser::Keep,
        long_vowels: true,
        qamets_qatan: true,
        sheva_after_meteg: true,
        sqnmlvy: true,
        strict: true,
        waw_shureq: true,
    };
}

impl Default for SylOpts {
    fn default() -> Self {
        Self::DEFAULT
    }
}
