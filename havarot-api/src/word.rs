//! Words

use havarot_core::chars::cp;
use havarot_core::{
    Chain, Char, Cluster, ConsonantName, Result as CoreResult, SylOpts, Syllabifier, Syllable,
    TaamName, VowelName,
};

use crate::error::Result;
use crate::normalize;

/// The tetragrammaton consonants
const DIVINE_NAME: [char; 4] = [cp::YOD, cp::HE, cp::VAV, cp::HE];

/// One normalized word and its clusters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    clusters: Vec<Cluster>,
    options: SylOpts,
}

impl Word {
    /// Build a word from already decomposed text
    pub fn new(word: &str, options: SylOpts) -> Self {
        let clusters = normalize::word_clusters(word, &options);
        let text = clusters.iter().map(Cluster::text).collect();
        Self {
            text,
            clusters,
            options,
        }
    }

    /// Sequenced text; equals the concatenation of the syllables' text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The clusters with neighbor links, for contextual predicates
    pub fn clusters(&self) -> Chain<Cluster> {
        Chain::new(self.clusters.clone())
    }

    pub fn cluster_slice(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn chars(&self) -> impl Iterator<Item = &Char> + '_ {
        self.clusters.iter().flat_map(|c| c.chars().iter())
    }

    /// Syllabify the word
    ///
    /// The divine name is never grouped: it is a single open, accented,
    /// final syllable.
    pub fn syllables(&self) -> Result<Vec<Syllable>> {
        if self.is_divine_name() {
            return Ok(vec![divine_name_syllable(self.clusters.clone())]);
        }
        Ok(Syllabifier::new(self.options).syllabify(&self.clusters)?)
    }

    /// Ends with a maqaf
    pub fn is_in_construct(&self) -> bool {
        self.text.ends_with(cp::MAQAF)
    }

    /// The Hebrew consonants of the word are exactly יהוה
    pub fn is_divine_name(&self) -> bool {
        self.consonants().eq(DIVINE_NAME)
    }

    /// יהוה occurs somewhere in the word's consonants (e.g. after a prefix)
    pub fn has_divine_name(&self) -> bool {
        let consonants: Vec<char> = self.consonants().collect();
        consonants.windows(DIVINE_NAME.len()).any(|w| w == DIVINE_NAME)
    }

    pub fn is_not_hebrew(&self) -> bool {
        self.clusters.iter().all(Cluster::is_not_hebrew)
    }

    fn consonants(&self) -> impl Iterator<Item = char> + '_ {
        self.clusters.iter().filter_map(Cluster::consonant)
    }

    pub fn consonant_names(&self) -> Vec<ConsonantName> {
        self.clusters
            .iter()
            .filter_map(Cluster::consonant_name)
            .collect()
    }

    pub fn vowel_names(&self) -> Vec<VowelName> {
        self.clusters.iter().flat_map(Cluster::vowel_names).collect()
    }

    pub fn taam_names(&self) -> Vec<TaamName> {
        self.clusters.iter().flat_map(Cluster::taam_names).collect()
    }

    pub fn has_vowel_named(&self, name: &str) -> CoreResult<bool> {
        let name = VowelName::parse(name)?;
        Ok(self.clusters.iter().any(|c| c.has_vowel_name(name)))
    }

    pub fn has_consonant_named(&self, name: &str) -> CoreResult<bool> {
        let name = ConsonantName::parse(name)?;
        Ok(self.clusters.iter().any(|c| c.has_consonant_name(name)))
    }

    pub fn has_taam_named(&self, name: &str) -> CoreResult<bool> {
        let name = TaamName::parse(name)?;
        Ok(self.clusters.iter().any(|c| c.has_taam_name(name)))
    }
}

fn divine_name_syllable(clusters: Vec<Cluster>) -> Syllable {
    Syllable::new(clusters, false).finalized(true, true)
}
