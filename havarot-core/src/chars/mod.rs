//! Character classification for pointed Hebrew
//!
//! Every code point maps to exactly one [`CharCategory`], and every category
//! carries a fixed rank used to put the marks of a cluster into canonical
//! order (consonant, ligature, dagesh/rafe, vowel, taam).

pub mod names;

use serde::Serialize;

pub use names::{ConsonantName, NameKind, TaamName, VowelName};

/// Code points the engine refers to by value
pub mod cp {
    pub const ALEF: char = '\u{05D0}';
    pub const HE: char = '\u{05D4}';
    pub const VAV: char = '\u{05D5}';
    pub const YOD: char = '\u{05D9}';
    pub const LAMED: char = '\u{05DC}';
    pub const FINAL_MEM: char = '\u{05DD}';

    pub const SHEVA: char = '\u{05B0}';
    pub const HIRIQ: char = '\u{05B4}';
    pub const TSERE: char = '\u{05B5}';
    pub const SEGOL: char = '\u{05B6}';
    pub const PATAH: char = '\u{05B7}';
    pub const QAMATS: char = '\u{05B8}';
    pub const HOLAM: char = '\u{05B9}';
    pub const HOLAM_HASER_FOR_VAV: char = '\u{05BA}';
    pub const QAMATS_QATAN: char = '\u{05C7}';

    pub const DAGESH: char = '\u{05BC}';
    pub const METEG: char = '\u{05BD}';
    pub const MAQAF: char = '\u{05BE}';
    pub const RAFE: char = '\u{05BF}';
    pub const PASEQ: char = '\u{05C0}';
    pub const SOF_PASUQ: char = '\u{05C3}';
    pub const NUN_HAFUKHA: char = '\u{05C6}';

    pub const SEGOLTA: char = '\u{0592}';
    pub const PASHTA: char = '\u{0599}';
    pub const QADMA: char = '\u{05A8}';
    pub const TELISHA_QETANA: char = '\u{05A9}';
}

/// Phonological category of a single code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CharCategory {
    /// Base letter (U+05D0–U+05F2)
    Consonant,
    /// Shin or sin dot
    Ligature,
    /// Dagesh, mappiq or rafe
    DageshOrRafe,
    /// Niqqud, including sheva and the hataf vowels
    Vowel,
    /// Cantillation mark, metheg, upper/lower dots
    Taam,
    /// Punctuation, Latin, digits, whitespace, anything unrecognised
    Other,
}

impl CharCategory {
    /// Sort rank used to canonicalize mark order within a cluster
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            CharCategory::Consonant => 0,
            CharCategory::Ligature => 1,
            CharCategory::DageshOrRafe => 2,
            CharCategory::Vowel => 3,
            CharCategory::Taam => 4,
            CharCategory::Other => 10,
        }
    }
}

/// Classify a code point. Total and pure.
#[inline]
pub const fn classify(ch: char) -> CharCategory {
    match ch {
        '\u{05D0}'..='\u{05F2}' => CharCategory::Consonant,
        '\u{05C1}' | '\u{05C2}' => CharCategory::Ligature,
        '\u{05BC}' | '\u{05BF}' => CharCategory::DageshOrRafe,
        '\u{05B0}'..='\u{05BB}' | '\u{05C7}' => CharCategory::Vowel,
        '\u{0591}'..='\u{05AF}' | '\u{05BD}' | '\u{05C4}' | '\u{05C5}' => CharCategory::Taam,
        _ => CharCategory::Other,
    }
}

/// True for code points in the Hebrew block or the Hebrew presentation forms
#[inline]
pub const fn is_hebrew(ch: char) -> bool {
    matches!(ch, '\u{0591}'..='\u{05F4}' | '\u{FB1D}'..='\u{FB4F}')
}

/// True for vowel marks other than sheva
#[inline]
pub const fn is_vowel_mark(ch: char) -> bool {
    matches!(ch, '\u{05B1}'..='\u{05BB}' | '\u{05C7}')
}

/// Long vowels: tsere, qamats, holam, holam haser for vav
#[inline]
pub const fn is_long_vowel(ch: char) -> bool {
    matches!(ch, cp::TSERE | cp::QAMATS | cp::HOLAM | cp::HOLAM_HASER_FOR_VAV)
}

/// Short vowels: hiriq, segol, patah, qubuts, qamats qatan
#[inline]
pub const fn is_short_vowel(ch: char) -> bool {
    matches!(
        ch,
        cp::HIRIQ | cp::SEGOL | cp::PATAH | '\u{05BB}' | cp::QAMATS_QATAN
    )
}

/// Hataf vowels
#[inline]
pub const fn is_half_vowel(ch: char) -> bool {
    matches!(ch, '\u{05B1}'..='\u{05B3}')
}

/// Cantillation marks proper (metheg and the dots are excluded)
#[inline]
pub const fn is_accent_mark(ch: char) -> bool {
    matches!(ch, '\u{0591}'..='\u{05AF}')
}

/// Hebrew punctuation that can stand in a cluster without a consonant
#[inline]
pub const fn is_punctuation_mark(ch: char) -> bool {
    matches!(
        ch,
        cp::MAQAF | cp::PASEQ | cp::SOF_PASUQ | cp::NUN_HAFUKHA | '\u{05F3}' | '\u{05F4}'
    )
}

/// Vowels after which a vowelless he, vav or yod reads as a mater lectionis
pub const fn mater_vowels(consonant: char) -> Option<&'static [char]> {
    match consonant {
        cp::HE => Some(&[cp::QAMATS, cp::SEGOL, cp::TSERE]),
        cp::VAV => Some(&[cp::HOLAM]),
        cp::YOD => Some(&[cp::HIRIQ, cp::TSERE, cp::SEGOL]),
        _ => None,
    }
}

/// One classified code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Char {
    value: char,
    category: CharCategory,
}

impl Char {
    /// Classify a code point
    pub const fn new(value: char) -> Self {
        Self {
            value,
            category: classify(value),
        }
    }

    /// The code point
    #[inline]
    pub const fn value(&self) -> char {
        self.value
    }

    /// The phonological category
    #[inline]
    pub const fn category(&self) -> CharCategory {
        self.category
    }

    /// The canonical sort rank of this character
    #[inline]
    pub const fn rank(&self) -> u8 {
        self.category.rank()
    }

    /// True if the character belongs to the Hebrew block
    #[inline]
    pub const fn is_hebrew(&self) -> bool {
        is_hebrew(self.value)
    }
}

impl From<char> for Char {
    fn from(value: char) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Char {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
