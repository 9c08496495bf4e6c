//! Syllables
//!
//! A syllable owns a non-empty run of clusters and three flags. The grouper
//! creates it, the annotator sets the flags, and non-Hebrew re-insertion may
//! rebuild it with extra clusters at either end.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::chars::{self, CharCategory, ConsonantName, TaamName, VowelName};
use crate::cluster::Cluster;
use crate::error::Result;

/// Onset, nucleus and coda of a syllable as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyllableStructure {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
}

/// One phonological syllable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    clusters: Vec<Cluster>,
    is_closed: bool,
    is_accented: bool,
    is_final: bool,
}

impl Syllable {
    pub fn new(clusters: Vec<Cluster>, is_closed: bool) -> Self {
        Self {
            clusters,
            is_closed,
            is_accented: false,
            is_final: false,
        }
    }

    /// Same flags, different clusters
    pub(crate) fn with_clusters(&self, clusters: Vec<Cluster>) -> Self {
        Self {
            clusters,
            is_closed: self.is_closed,
            is_accented: self.is_accented,
            is_final: self.is_final,
        }
    }

    /// Set the accented and final flags of a syllable built outside the
    /// grouper (a word treated as one unit)
    pub fn finalized(mut self, is_accented: bool, is_final: bool) -> Self {
        self.is_accented = is_accented;
        self.is_final = is_final;
        self
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }

    /// Concatenated cluster text
    pub fn text(&self) -> String {
        self.clusters.iter().map(Cluster::text).collect()
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn is_accented(&self) -> bool {
        self.is_accented
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn set_closed(&mut self, value: bool) {
        self.is_closed = value;
    }

    pub(crate) fn set_accented(&mut self, value: bool) {
        self.is_accented = value;
    }

    pub(crate) fn set_final(&mut self, value: bool) {
        self.is_final = value;
    }

    fn any(&self, pred: impl Fn(&Cluster) -> bool) -> bool {
        self.clusters.iter().any(pred)
    }

    pub fn has_vowel_name(&self, name: VowelName) -> bool {
        self.any(|c| c.has_vowel_name(name))
    }

    pub fn has_consonant_name(&self, name: ConsonantName) -> bool {
        self.any(|c| c.has_consonant_name(name))
    }

    pub fn has_taam_name(&self, name: TaamName) -> bool {
        self.any(|c| c.has_taam_name(name))
    }

    pub fn has_vowel_named(&self, name: &str) -> Result<bool> {
        VowelName::parse(name).map(|n| self.has_vowel_name(n))
    }

    pub fn has_consonant_named(&self, name: &str) -> Result<bool> {
        ConsonantName::parse(name).map(|n| self.has_consonant_name(n))
    }

    pub fn has_taam_named(&self, name: &str) -> Result<bool> {
        TaamName::parse(name).map(|n| self.has_taam_name(n))
    }

    pub fn vowel_names(&self) -> Vec<VowelName> {
        self.clusters.iter().flat_map(Cluster::vowel_names).collect()
    }

    pub fn taam_names(&self) -> Vec<TaamName> {
        self.clusters.iter().flat_map(Cluster::taam_names).collect()
    }

    /// Split the text into onset, nucleus and coda
    ///
    /// The nucleus is the vowel of the first voweled cluster (or its shureq,
    /// or its sheva), followed by any vowel letters that trail it.
    pub fn structure(&self) -> SyllableStructure {
        let nucleus_at = self
            .clusters
            .iter()
            .position(Cluster::has_vowel)
            .or_else(|| self.clusters.iter().position(Cluster::is_shureq))
            .or_else(|| self.clusters.iter().position(Cluster::has_sheva));

        let mut structure = SyllableStructure::default();
        let Some(at) = nucleus_at else {
            structure.onset = self.text();
            return structure;
        };

        for cluster in &self.clusters[..at] {
            structure.onset.push_str(cluster.text());
        }

        let nucleus = &self.clusters[at];
        if nucleus.is_shureq() {
            structure.nucleus.push_str(nucleus.text());
        } else {
            for ch in nucleus.chars() {
                match ch.category() {
                    CharCategory::Consonant
                    | CharCategory::Ligature
                    | CharCategory::DageshOrRafe => structure.onset.push(ch.value()),
                    _ => structure.nucleus.push(ch.value()),
                }
            }
        }

        let mut rest = self.clusters[at + 1..].iter().peekable();
        let mut prev = nucleus;
        while let Some(next) = rest.next_if(|c| is_vowel_letter(c, prev)) {
            structure.nucleus.push_str(next.text());
            prev = next;
        }
        for cluster in rest {
            structure.coda.push_str(cluster.text());
        }
        structure
    }
}

/// A vowelless he/vav/yod matching the previous vowel, or a quiesced aleph
fn is_vowel_letter(cluster: &Cluster, prev: &Cluster) -> bool {
    if cluster.is_quiesced_aleph() {
        return true;
    }
    if cluster.has_vowel() || cluster.has_sheva() || cluster.has_dagesh() {
        return false;
    }
    cluster
        .consonant()
        .and_then(chars::mater_vowels)
        .is_some_and(|vowels| vowels.iter().any(|&v| prev.contains(v)))
}

impl Serialize for Syllable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Syllable", 5)?;
        state.serialize_field("text", &self.text())?;
        state.serialize_field("clusters", &self.clusters)?;
        state.serialize_field("is_closed", &self.is_closed)?;
        state.serialize_field("is_accented", &self.is_accented)?;
        state.serialize_field("is_final", &self.is_final)?;
        state.end()
    }
}
