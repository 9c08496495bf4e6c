//! The four grouping passes
//!
//! All passes run over the word reversed, so index 0 is the rightmost
//! cluster. Each pass consumes a mixed sequence of loose clusters and
//! finished syllables and returns a new one; nothing is ever regrouped.

use crate::chain::{Chain, Node};
use crate::chars::cp;
use crate::cluster::Cluster;
use crate::error::{CoreError, Result, ViolationKind};
use crate::options::SylOpts;

/// Consonants whose sheva stays vocal after waw consecutive (ש ס צ ק נ מ ל ו י)
const SQNMLVY: [char; 9] = [
    '\u{05E9}', '\u{05E1}', '\u{05E6}', '\u{05E7}', '\u{05E0}', '\u{05DE}', '\u{05DC}', '\u{05D5}',
    '\u{05D9}',
];

/// Consonants that drop their doubling after the article (י ל מ)
const ARTICLE_UNDOUBLED: [char; 3] = ['\u{05D9}', '\u{05DC}', '\u{05DE}'];

/// A syllable in the making: chain indices plus its closed flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Draft {
    pub clusters: Vec<usize>,
    pub closed: bool,
}

impl Draft {
    fn open(clusters: Vec<usize>) -> Self {
        Self {
            clusters,
            closed: false,
        }
    }

    fn closed(clusters: Vec<usize>) -> Self {
        Self {
            clusters,
            closed: true,
        }
    }
}

/// One element of a pass's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Unit {
    Cluster(usize),
    Syllable(Draft),
}

/// Sheva pass state
#[derive(Debug)]
enum ShevaState {
    Idle,
    /// A vocal sheva syllable still looking for its nucleus
    Pending(Vec<usize>),
}

/// What the pending sheva syllable does with the next cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShevaStep {
    /// Emit the pending syllable open and leave the cluster loose
    Split,
    /// The cluster is the nucleus: emit a closed syllable
    Absorb,
    /// Take the cluster and keep looking
    Continue,
    /// Another sheva: emit the pending syllable and start over
    Restart,
}

pub(crate) struct Grouper<'a> {
    chain: &'a Chain<Cluster>,
    opts: &'a SylOpts,
    word: &'a str,
}

impl<'a> Grouper<'a> {
    pub(crate) fn new(chain: &'a Chain<Cluster>, opts: &'a SylOpts, word: &'a str) -> Self {
        Self { chain, opts, word }
    }

    /// Partition the chain into syllables, returned left to right
    pub(crate) fn group(&self) -> Result<Vec<Draft>> {
        if self.chain.is_empty() {
            return Ok(Vec::new());
        }
        let reversed: Vec<usize> = (0..self.chain.len()).rev().collect();

        let units = self.group_final(&reversed);
        tracing::trace!(?units, "final syllable");
        let units = self.group_shevas(units);
        tracing::trace!(?units, "shevas grouped");
        let units = self.group_shureqs(units)?;
        let units = self.group_maters(units)?;
        tracing::trace!(?units, "shureqs and maters grouped");

        Ok(units
            .into_iter()
            .rev()
            .map(|unit| match unit {
                Unit::Cluster(index) => Draft::open(vec![index]),
                Unit::Syllable(mut draft) => {
                    draft.clusters.reverse();
                    draft
                }
            })
            .collect())
    }

    fn node(&self, index: usize) -> Node<'a, Cluster> {
        self.chain.at(index)
    }

    /// Build the rightmost syllable; everything else passes through loose
    fn group_final(&self, reversed: &[usize]) -> Vec<Unit> {
        let mut clusters = Vec::new();
        let mut i = 0;

        if reversed.len() > 1 && self.chain[reversed[0]].is_punctuation() {
            clusters.push(reversed[0]);
            i = 1;
        }

        let last = self.node(reversed[i]);
        clusters.push(reversed[i]);
        i += 1;

        let sheva_before = reversed
            .get(i)
            .is_some_and(|&prev| self.chain[prev].has_sheva());
        let closed = last.consonant().is_some()
            && !last.is_shureq()
            && !last.is_mater()
            && (last.consonant() != Some(cp::ALEF) || sheva_before)
            && !(last.consonant() == Some(cp::HE) && !last.has_dagesh())
            && !last.has_vowel();

        if last.is_shureq() {
            if let Some(&onset) = reversed.get(i) {
                clusters.push(onset);
                i += 1;
            }
        } else if !last.has_vowel() {
            while let Some(&index) = reversed.get(i) {
                clusters.push(index);
                i += 1;
                let cluster = &self.chain[index];
                if cluster.has_vowel() {
                    break;
                }
                if cluster.is_shureq() {
                    if let Some(&onset) = reversed.get(i) {
                        clusters.push(onset);
                        i += 1;
                    }
                    break;
                }
            }
        }

        let mut units = Vec::with_capacity(reversed.len() - i + 1);
        units.push(Unit::Syllable(Draft { clusters, closed }));
        units.extend(reversed[i..].iter().map(|&index| Unit::Cluster(index)));
        units
    }

    fn group_shevas(&self, units: Vec<Unit>) -> Vec<Unit> {
        let len = units.len();
        let mut out = Vec::with_capacity(len);
        let mut state = ShevaState::Idle;

        for (pos, unit) in units.into_iter().enumerate() {
            state = match (state, unit) {
                (ShevaState::Idle, Unit::Syllable(draft)) => {
                    out.push(Unit::Syllable(draft));
                    ShevaState::Idle
                }
                (ShevaState::Pending(pending), Unit::Syllable(draft)) => {
                    out.push(Unit::Syllable(Draft::open(pending)));
                    out.push(Unit::Syllable(draft));
                    ShevaState::Idle
                }
                (ShevaState::Idle, Unit::Cluster(index)) => {
                    if self.chain[index].has_sheva() {
                        ShevaState::Pending(vec![index])
                    } else {
                        out.push(Unit::Cluster(index));
                        ShevaState::Idle
                    }
                }
                (ShevaState::Pending(mut pending), Unit::Cluster(index)) => {
                    let is_word_initial = pos + 1 == len;
                    match self.sheva_step(pending[0], index, is_word_initial) {
                        ShevaStep::Split => {
                            out.push(Unit::Syllable(Draft::open(pending)));
                            out.push(Unit::Cluster(index));
                            ShevaState::Idle
                        }
                        ShevaStep::Absorb => {
                            pending.push(index);
                            out.push(Unit::Syllable(Draft::closed(pending)));
                            ShevaState::Idle
                        }
                        ShevaStep::Continue => {
                            pending.push(index);
                            ShevaState::Pending(pending)
                        }
                        ShevaStep::Restart => {
                            out.push(Unit::Syllable(Draft::open(pending)));
                            ShevaState::Pending(vec![index])
                        }
                    }
                }
            };
        }

        if let ShevaState::Pending(pending) = state {
            out.push(Unit::Syllable(Draft::open(pending)));
        }
        out
    }

    /// Decide what a pending sheva syllable (started at `sheva`) does with
    /// the cluster to its left
    fn sheva_step(&self, sheva: usize, index: usize, is_word_initial: bool) -> ShevaStep {
        let opts = self.opts;
        let pending = &self.chain[sheva];
        let node = self.node(index);

        if node.has_sheva() {
            return ShevaStep::Restart;
        }
        if node.is_shureq() {
            return if is_word_initial && !opts.waw_shureq {
                ShevaStep::Absorb
            } else {
                ShevaStep::Split
            };
        }
        if node.has_half_vowel() {
            return ShevaStep::Split;
        }

        let doubled = pending.has_doubling_dagesh();
        let after_meteg = opts.sheva_after_meteg && node.has_metheg();

        if node.has_short_vowel() {
            let split = doubled
                || after_meteg
                || self.is_sqnmlvy(pending, &node)
                || self.is_article(pending, &node);
            return if split {
                ShevaStep::Split
            } else {
                ShevaStep::Absorb
            };
        }
        if node.has_long_vowel() {
            return if opts.long_vowels && !after_meteg && !doubled {
                ShevaStep::Absorb
            } else {
                ShevaStep::Split
            };
        }
        // a silent letter only rides along when long vowels may absorb
        if (node.is_mater() || node.is_quiesced_aleph()) && !opts.long_vowels {
            return ShevaStep::Split;
        }
        ShevaStep::Continue
    }

    /// Waw consecutive (vav + patah) before an undoubled SQNMLVY letter
    fn is_sqnmlvy(&self, pending: &Cluster, node: &Cluster) -> bool {
        self.opts.sqnmlvy
            && pending.consonant().is_some_and(|c| SQNMLVY.contains(&c))
            && !pending.has_dagesh()
            && node.consonant() == Some(cp::VAV)
            && node.contains(cp::PATAH)
    }

    /// Article (he + patah) before an undoubled yod, lamed or mem
    fn is_article(&self, pending: &Cluster, node: &Cluster) -> bool {
        self.opts.article
            && pending
                .consonant()
                .is_some_and(|c| ARTICLE_UNDOUBLED.contains(&c))
            && !pending.has_dagesh()
            && node.consonant() == Some(cp::HE)
            && node.contains(cp::PATAH)
    }

    fn group_shureqs(&self, units: Vec<Unit>) -> Result<Vec<Unit>> {
        let mut out = Vec::with_capacity(units.len());
        let mut iter = units.into_iter().peekable();

        while let Some(unit) = iter.next() {
            let Unit::Cluster(index) = unit else {
                out.push(unit);
                continue;
            };
            if !self.chain[index].is_shureq() {
                out.push(Unit::Cluster(index));
                continue;
            }
            match iter.peek() {
                Some(&Unit::Cluster(onset)) => {
                    iter.next();
                    out.push(Unit::Syllable(Draft::open(vec![index, onset])));
                }
                Some(Unit::Syllable(_)) => {
                    self.violation(ViolationKind::Shureq, index)?;
                    out.push(Unit::Cluster(index));
                }
                None => out.push(Unit::Cluster(index)),
            }
        }
        Ok(out)
    }

    fn group_maters(&self, units: Vec<Unit>) -> Result<Vec<Unit>> {
        let mut out = Vec::with_capacity(units.len());
        let mut iter = units.into_iter().peekable();

        while let Some(unit) = iter.next() {
            let Unit::Cluster(index) = unit else {
                out.push(unit);
                continue;
            };
            let node = self.node(index);
            let kind = if node.is_mater() {
                ViolationKind::Mater
            } else if node.is_quiesced_aleph() {
                ViolationKind::QuiescedAleph
            } else {
                out.push(Unit::Cluster(index));
                continue;
            };
            match iter.peek() {
                Some(&Unit::Cluster(prev)) => {
                    iter.next();
                    out.push(Unit::Syllable(Draft::open(vec![index, prev])));
                }
                _ => {
                    self.violation(kind, index)?;
                    out.push(Unit::Cluster(index));
                }
            }
        }
        Ok(out)
    }

    /// Fail in strict mode; otherwise log and leave the cluster loose
    fn violation(&self, kind: ViolationKind, index: usize) -> Result<()> {
        let cluster = self.chain[index].text();
        if self.opts.strict {
            return Err(CoreError::StructuralViolation {
                kind,
                cluster: cluster.to_string(),
                word: self.word.to_string(),
            });
        }
        tracing::warn!(%kind, cluster, word = self.word, "left ungrouped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::split_clusters;

    fn closed_flags(word: &str, opts: SylOpts) -> Vec<bool> {
        let chain: Chain<Cluster> = split_clusters(word).into();
        let drafts = Grouper::new(&chain, &opts, word).group().unwrap();
        drafts.iter().map(|d| d.closed).collect()
    }

    fn group(word: &str, opts: SylOpts) -> Result<Vec<String>> {
        let chain: Chain<Cluster> = split_clusters(word).into();
        let drafts = Grouper::new(&chain, &opts, word).group()?;
        Ok(drafts
            .iter()
            .map(|d| d.clusters.iter().map(|&i| chain[i].text()).collect())
            .collect())
    }

    #[test]
    fn test_final_walks_to_vowel() {
        // קָטִיל
        let word = "\u{05E7}\u{05B8}\u{05D8}\u{05B4}\u{05D9}\u{05DC}";
        let syls = group(word, SylOpts::default()).unwrap();
        assert_eq!(syls, vec!["\u{05E7}\u{05B8}", "\u{05D8}\u{05B4}\u{05D9}\u{05DC}"]);
    }

    #[test]
    fn test_final_closed_flag() {
        let opts = SylOpts::default();
        let closed = |word: &str| {
            let chain: Chain<Cluster> = split_clusters(word).into();
            let drafts = Grouper::new(&chain, &opts, word).group().unwrap();
            drafts.last().map(|d| d.closed).unwrap()
        };
        // יָם: consonant coda
        assert!(closed("\u{05D9}\u{05B8}\u{05DD}"));
        // סוּסָה: bare he is a vowel letter
        assert!(!closed("\u{05E1}\u{05D5}\u{05BC}\u{05E1}\u{05B8}\u{05D4}"));
        // סוּסָהּ: mappiq he closes
        assert!(closed("\u{05E1}\u{05D5}\u{05BC}\u{05E1}\u{05B8}\u{05D4}\u{05BC}"));
        // בָּרָא: quiesced aleph
        assert!(!closed("\u{05D1}\u{05BC}\u{05B8}\u{05E8}\u{05B8}\u{05D0}"));
    }

    #[test]
    fn test_lone_punctuation_is_open() {
        assert_eq!(group("\u{05C0}", SylOpts::default()).unwrap(), vec!["\u{05C0}"]);
        assert_eq!(closed_flags("\u{05C0}", SylOpts::default()), vec![false]);
        assert_eq!(closed_flags("\u{05C3}", SylOpts::default()), vec![false]);
    }

    #[test]
    fn test_final_skips_punctuation() {
        // יָם followed by a paseq
        let syls = group("\u{05D9}\u{05B8}\u{05DD}\u{05C0}", SylOpts::default()).unwrap();
        assert_eq!(syls, vec!["\u{05D9}\u{05B8}\u{05DD}\u{05C0}"]);
    }

    #[test]
    fn test_sqnmlvy_split() {
        // וַיְצַחֵק
        let word = "\u{05D5}\u{05B7}\u{05D9}\u{05B0}\u{05E6}\u{05B7}\u{05D7}\u{05B5}\u{05E7}";
        let on = group(word, SylOpts::default()).unwrap();
        assert_eq!(on.len(), 4);
        let off = group(
            word,
            SylOpts {
                sqnmlvy: false,
                ..SylOpts::default()
            },
        )
        .unwrap();
        assert_eq!(off[0], "\u{05D5}\u{05B7}\u{05D9}\u{05B0}");
        assert_eq!(off.len(), 3);
    }

    #[test]
    fn test_article_split() {
        // הַמְלָכִים
        let word = concat!(
            "\u{05D4}\u{05B7}\u{05DE}\u{05B0}",
            "\u{05DC}\u{05B8}\u{05DB}\u{05B4}\u{05D9}\u{05DD}"
        );
        let on = group(word, SylOpts::default()).unwrap();
        assert_eq!(on[0], "\u{05D4}\u{05B7}");
        assert_eq!(on[1], "\u{05DE}\u{05B0}");
        let off = group(
            word,
            SylOpts {
                article: false,
                ..SylOpts::default()
            },
        )
        .unwrap();
        assert_eq!(off[0], "\u{05D4}\u{05B7}\u{05DE}\u{05B0}");
    }

    #[test]
    fn test_word_initial_shureq() {
        // וּבְנֵי
        let word = "\u{05D5}\u{05BC}\u{05D1}\u{05B0}\u{05E0}\u{05B5}\u{05D9}";
        let on = group(word, SylOpts::default()).unwrap();
        assert_eq!(
            on,
            vec!["\u{05D5}\u{05BC}", "\u{05D1}\u{05B0}", "\u{05E0}\u{05B5}\u{05D9}"]
        );
        let off = group(
            word,
            SylOpts {
                waw_shureq: false,
                ..SylOpts::default()
            },
        )
        .unwrap();
        assert_eq!(off[0], "\u{05D5}\u{05BC}\u{05D1}\u{05B0}");
    }

    #[test]
    fn test_long_vowel_option() {
        // שָׁמְרוּ
        let word = "\u{05E9}\u{05C1}\u{05B8}\u{05DE}\u{05B0}\u{05E8}\u{05D5}\u{05BC}";
        let on = group(word, SylOpts::default()).unwrap();
        assert_eq!(on[0], "\u{05E9}\u{05C1}\u{05B8}\u{05DE}\u{05B0}");
        let off = group(
            word,
            SylOpts {
                long_vowels: false,
                ..SylOpts::default()
            },
        )
        .unwrap();
        assert_eq!(off[0], "\u{05E9}\u{05C1}\u{05B8}");
        assert_eq!(off[1], "\u{05DE}\u{05B0}");
    }

    #[test]
    fn test_quiesced_aleph_without_long_vowels() {
        // יֹאמְרוּ
        let word = "\u{05D9}\u{05B9}\u{05D0}\u{05DE}\u{05B0}\u{05E8}\u{05D5}\u{05BC}";
        let on = group(word, SylOpts::default()).unwrap();
        assert_eq!(
            on,
            vec!["\u{05D9}\u{05B9}\u{05D0}\u{05DE}\u{05B0}", "\u{05E8}\u{05D5}\u{05BC}"]
        );
        let opts = SylOpts {
            long_vowels: false,
            ..SylOpts::default()
        };
        assert_eq!(
            group(word, opts).unwrap(),
            vec!["\u{05D9}\u{05B9}\u{05D0}", "\u{05DE}\u{05B0}", "\u{05E8}\u{05D5}\u{05BC}"]
        );
    }

    #[test]
    fn test_sheva_after_meteg_option() {
        // יָֽדְךָ
        let word = "\u{05D9}\u{05B8}\u{05BD}\u{05D3}\u{05B0}\u{05DA}\u{05B8}";
        let on = group(word, SylOpts::default()).unwrap();
        assert_eq!(
            on,
            vec!["\u{05D9}\u{05B8}\u{05BD}", "\u{05D3}\u{05B0}", "\u{05DA}\u{05B8}"]
        );
        assert_eq!(closed_flags(word, SylOpts::default()), vec![false, false, false]);

        let opts = SylOpts {
            sheva_after_meteg: false,
            ..SylOpts::default()
        };
        assert_eq!(
            group(word, opts).unwrap(),
            vec!["\u{05D9}\u{05B8}\u{05BD}\u{05D3}\u{05B0}", "\u{05DA}\u{05B8}"]
        );
        assert_eq!(closed_flags(word, opts), vec![true, false]);
    }

    #[test]
    fn test_mater_after_syllable_is_strict_error() {
        // a yod mater behind a cluster that already closed as a sheva syllable
        let word = "\u{05D1}\u{05B0}\u{05B4}\u{05D9}\u{05D3}\u{05B8}";
        let err = group(word, SylOpts::default()).unwrap_err();
        match err {
            CoreError::StructuralViolation { kind, cluster, .. } => {
                assert_eq!(kind, ViolationKind::Mater);
                assert_eq!(cluster, "\u{05D9}");
            }
            other => panic!("unexpected error: {other}"),
        }
        let loose = group(
            word,
            SylOpts {
                strict: false,
                ..SylOpts::default()
            },
        )
        .unwrap();
        assert_eq!(loose, vec!["\u{05D1}\u{05B0}\u{05B4}", "\u{05D9}", "\u{05D3}\u{05B8}"]);
    }

    #[test]
    fn test_shureq_after_syllable_is_strict_error() {
        // לְוּדְרְדַּיְל
        let word = concat!(
            "\u{05DC}\u{05B0}\u{05D5}\u{05BC}\u{05D3}\u{05B0}\u{05E8}\u{05B0}",
            "\u{05D3}\u{05BC}\u{05B7}\u{05D9}\u{05B0}\u{05DC}"
        );
        let err = group(word, SylOpts::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::StructuralViolation {
                kind: ViolationKind::Shureq,
                ..
            }
        ));
        let loose = group(
            word,
            SylOpts {
                strict: false,
                ..SylOpts::default()
            },
        )
        .unwrap();
        assert!(loose.contains(&"\u{05D5}\u{05BC}".to_string()));
    }

    #[test]
    fn test_word_initial_quiesced_aleph_is_strict_error() {
        let word = "\u{05D0}\u{05D1}\u{05B8}\u{05DD}";
        let err = group(word, SylOpts::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::StructuralViolation {
                kind: ViolationKind::QuiescedAleph,
                ..
            }
        ));
    }
}
