//! Word syllabification
//!
//! [`Syllabifier`] turns one word's clusters into syllables:
//!
//! 1. Non-Hebrew clusters are set aside, remembering where they were
//! 2. The Hebrew clusters are grouped right to left in four passes
//!    (final syllable, shevas, shureqs, maters)
//! 3. Closed, accented and final flags are assigned
//! 4. The set-aside clusters are spliced back in
//!
//! Concatenating the resulting syllables' text always reproduces the
//! concatenated cluster text.

mod annotate;
mod grouping;
mod reinsert;

use crate::chain::Chain;
use crate::cluster::{split_clusters, Cluster};
use crate::error::Result;
use crate::options::SylOpts;
use crate::syllable::Syllable;

use self::grouping::Grouper;
use self::reinsert::SetAside;

/// Syllabifies words under one set of options
///
/// Holds no per-word state; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Syllabifier {
    opts: SylOpts,
}

impl Syllabifier {
    pub fn new(opts: SylOpts) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &SylOpts {
        &self.opts
    }

    /// Syllabify a word given as clusters
    ///
    /// An empty input yields no syllables. A word with no Hebrew clusters
    /// yields a single final syllable holding all of them.
    ///
    /// # Errors
    ///
    /// [`CoreError::StructuralViolation`](crate::CoreError::StructuralViolation)
    /// in strict mode when a shureq, mater or quiesced aleph cannot be grouped.
    pub fn syllabify(&self, clusters: &[Cluster]) -> Result<Vec<Syllable>> {
        if clusters.is_empty() {
            return Ok(Vec::new());
        }
        let word: String = clusters.iter().map(Cluster::text).collect();

        let mut hebrew = Vec::with_capacity(clusters.len());
        let mut set_aside = Vec::new();
        for cluster in clusters {
            if cluster.is_not_hebrew() {
                set_aside.push(SetAside {
                    anchor: hebrew.len(),
                    cluster: cluster.clone(),
                });
            } else {
                hebrew.push(cluster.clone());
            }
        }

        if hebrew.is_empty() {
            tracing::debug!(%word, "no Hebrew clusters");
            let mut syllable = Syllable::new(clusters.to_vec(), false);
            syllable.set_final(true);
            return Ok(vec![syllable]);
        }

        let chain = Chain::new(hebrew);
        let drafts = Grouper::new(&chain, &self.opts, &word).group()?;
        let syllables = annotate::annotate(&chain, drafts);
        let syllables = reinsert::reinsert(syllables, set_aside);

        tracing::debug!(%word, count = syllables.len(), "syllabified");
        Ok(syllables)
    }

    /// Split a normalized word into clusters and syllabify it
    pub fn syllabify_word(&self, word: &str) -> Result<Vec<Syllable>> {
        self.syllabify(&split_clusters(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word() {
        assert!(Syllabifier::default().syllabify(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_non_hebrew_word_is_one_syllable() {
        let syls = Syllabifier::default().syllabify_word("abc").unwrap();
        assert_eq!(syls.len(), 1);
        assert_eq!(syls[0].text(), "abc");
        assert!(syls[0].is_final());
    }

    #[test]
    fn test_round_trip_with_brackets() {
        let word = "(\u{05D3}\u{05BC}\u{05B8}\u{05D1}\u{05B8}\u{05E8})";
        let syls = Syllabifier::default().syllabify_word(word).unwrap();
        let text: String = syls.iter().map(Syllable::text).collect();
        assert_eq!(text, word);
        assert_eq!(syls.len(), 2);
        assert!(syls[1].is_accented());
    }
}
