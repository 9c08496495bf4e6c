//! Orthographic clusters
//!
//! A cluster is one base consonant with its marks, or an opaque run of
//! non-Hebrew text. Construction puts the marks into canonical rank order;
//! all predicates are computed from the characters. Predicates that depend
//! on neighbors (`is_mater`, `has_metheg`, `has_silluq`) live on
//! [`Node<Cluster>`](crate::chain::Node) so they can look left and right in
//! the word's [`Chain`](crate::chain::Chain).

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::chain::Node;
use crate::chars::{self, cp, Char, CharCategory, ConsonantName, TaamName, VowelName};
use crate::error::Result;

/// One orthographic unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cluster {
    chars: SmallVec<[Char; 6]>,
    text: String,
}

impl Cluster {
    /// Build a cluster from one run of code points, sorting marks by rank
    pub fn new(run: &str) -> Self {
        let mut chars: SmallVec<[Char; 6]> = run.chars().map(Char::new).collect();
        // stable: equal ranks keep their input order
        chars.sort_by_key(Char::rank);
        let text = chars.iter().map(Char::value).collect();
        Self { chars, text }
    }

    /// Canonical text (sorted marks)
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[Char] {
        &self.chars
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.iter().any(|c| c.value() == ch)
    }

    #[inline]
    fn any(&self, pred: impl Fn(char) -> bool) -> bool {
        self.chars.iter().any(|c| pred(c.value()))
    }

    /// The base consonant, if any
    pub fn consonant(&self) -> Option<char> {
        self.chars
            .iter()
            .find(|c| c.category() == CharCategory::Consonant)
            .map(Char::value)
    }

    pub fn consonant_name(&self) -> Option<ConsonantName> {
        self.consonant().and_then(ConsonantName::from_char)
    }

    /// True if a vowel other than sheva is present (hataf vowels count)
    pub fn has_vowel(&self) -> bool {
        self.any(chars::is_vowel_mark)
    }

    pub fn has_sheva(&self) -> bool {
        self.contains(cp::SHEVA)
    }

    pub fn has_long_vowel(&self) -> bool {
        self.any(chars::is_long_vowel)
    }

    pub fn has_short_vowel(&self) -> bool {
        self.any(chars::is_short_vowel)
    }

    pub fn has_half_vowel(&self) -> bool {
        self.any(chars::is_half_vowel)
    }

    pub fn has_dagesh(&self) -> bool {
        self.contains(cp::DAGESH)
    }

    /// Dagesh that doubles its consonant (a shureq's dagesh does not)
    pub fn has_doubling_dagesh(&self) -> bool {
        self.has_dagesh() && !self.is_shureq()
    }

    /// Metheg mark present, regardless of whether it acts as silluq
    pub fn has_metheg_mark(&self) -> bool {
        self.contains(cp::METEG)
    }

    /// Any cantillation mark proper (metheg excluded)
    pub fn has_accent_mark(&self) -> bool {
        self.any(chars::is_accent_mark)
    }

    pub fn has_sof_pasuq(&self) -> bool {
        self.contains(cp::SOF_PASUQ)
    }

    /// Vav with dagesh acting as the vowel u
    pub fn is_shureq(&self) -> bool {
        if self.has_vowel() || self.has_sheva() {
            return false;
        }
        matches!(
            (self.chars.first(), self.chars.get(1)),
            (Some(v), Some(d)) if v.value() == cp::VAV && d.value() == cp::DAGESH
        )
    }

    /// Aleph carrying no vowel and no sheva
    pub fn is_quiesced_aleph(&self) -> bool {
        self.consonant() == Some(cp::ALEF) && !self.has_vowel() && !self.has_sheva()
    }

    /// Hebrew punctuation with no consonant (paseq, maqaf, sof pasuq)
    pub fn is_punctuation(&self) -> bool {
        self.consonant().is_none()
            && self.any(chars::is_punctuation_mark)
            && self.chars.iter().all(Char::is_hebrew)
    }

    /// No code point from the Hebrew block at all
    pub fn is_not_hebrew(&self) -> bool {
        !self.chars.iter().any(Char::is_hebrew)
    }

    /// The cluster's vowel (sheva excluded) and its name
    pub fn vowel(&self) -> Option<(char, VowelName)> {
        self.chars
            .iter()
            .map(Char::value)
            .find(|&c| chars::is_vowel_mark(c))
            .and_then(|c| VowelName::from_char(c).map(|name| (c, name)))
    }

    pub fn vowel_name(&self) -> Option<VowelName> {
        self.vowel().map(|(_, name)| name)
    }

    /// Every vowel point present, sheva included
    pub fn vowel_names(&self) -> Vec<VowelName> {
        self.chars
            .iter()
            .filter_map(|c| VowelName::from_char(c.value()))
            .collect()
    }

    pub fn taam_names(&self) -> Vec<TaamName> {
        self.chars
            .iter()
            .filter_map(|c| TaamName::from_char(c.value()))
            .collect()
    }

    pub fn has_vowel_name(&self, name: VowelName) -> bool {
        self.contains(name.char())
    }

    pub fn has_consonant_name(&self, name: ConsonantName) -> bool {
        self.consonant() == Some(name.char())
    }

    pub fn has_taam_name(&self, name: TaamName) -> bool {
        self.contains(name.char())
    }

    /// String query; unknown names are an error, not `false`
    pub fn has_vowel_named(&self, name: &str) -> Result<bool> {
        VowelName::parse(name).map(|n| self.has_vowel_name(n))
    }

    pub fn has_consonant_named(&self, name: &str) -> Result<bool> {
        ConsonantName::parse(name).map(|n| self.has_consonant_name(n))
    }

    pub fn has_taam_named(&self, name: &str) -> Result<bool> {
        TaamName::parse(name).map(|n| self.has_taam_name(n))
    }
}

/// Cut a normalized word into clusters
///
/// A cut falls before every consonant, before every paseq, and wherever the
/// text switches between Hebrew and non-Hebrew code points. Cutting never
/// rewrites: for marks already in rank order the clusters concatenate back
/// to `word`.
///
/// In the irregular "Jerusalem" spelling the hiriq that follows a lamed's
/// patah and directly precedes the final mem starts a consonant-less cluster
/// of its own. The hiriq has to be sequenced there already (see
/// `havarot_api::normalize`); a hiriq ahead of the patah stays on the lamed.
pub fn split_clusters(word: &str) -> Vec<Cluster> {
    let mut runs: Vec<String> = Vec::new();
    let mut prev: Option<char> = None;
    let mut rest = word.chars().peekable();
    while let Some(ch) = rest.next() {
        let cut = match (prev, runs.last()) {
            (Some(p), Some(run)) => {
                chars::classify(ch) == CharCategory::Consonant
                    || ch == cp::PASEQ
                    || chars::is_hebrew(p) != chars::is_hebrew(ch)
                    || is_jerusalem_hiriq(run, ch, rest.peek().copied())
            }
            _ => true,
        };
        match runs.last_mut() {
            Some(run) if !cut => run.push(ch),
            _ => runs.push(ch.to_string()),
        }
        prev = Some(ch);
    }
    runs.iter().map(|run| Cluster::new(run)).collect()
}

/// A hiriq after a lamed's patah, right before the final mem
fn is_jerusalem_hiriq(run: &str, ch: char, next: Option<char>) -> bool {
    ch == cp::HIRIQ
        && next == Some(cp::FINAL_MEM)
        && run.starts_with(cp::LAMED)
        && run.contains(cp::PATAH)
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Cluster {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl Node<'_, Cluster> {
    /// He, vav or yod acting as a vowel letter for the previous cluster
    pub fn is_mater(&self) -> bool {
        let cluster = self.value();
        if cluster.has_vowel()
            || cluster.is_shureq()
            || cluster.has_sheva()
            || cluster.has_dagesh()
        {
            return false;
        }
        if self.next().is_some_and(|next| next.is_shureq()) {
            return false;
        }
        let Some(prev) = self.prev() else {
            return false;
        };
        cluster
            .consonant()
            .and_then(chars::mater_vowels)
            .is_some_and(|vowels| vowels.iter().any(|&v| prev.contains(v)))
    }

    /// Metheg that is not a silluq
    ///
    /// Scans forward: another metheg first means this one is a metheg, a sof
    /// pasuq first means it is a silluq. Running off the end counts as metheg.
    pub fn has_metheg(&self) -> bool {
        if !self.has_metheg_mark() {
            return false;
        }
        for next in self.successors() {
            if next.has_metheg_mark() {
                return true;
            }
            if next.has_sof_pasuq() {
                return false;
            }
        }
        true
    }

    /// Metheg mark acting as silluq
    pub fn has_silluq(&self) -> bool {
        self.has_metheg_mark() && !self.has_metheg()
    }
}
