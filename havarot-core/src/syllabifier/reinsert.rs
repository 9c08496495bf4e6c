//! Putting non-Hebrew clusters back

use crate::cluster::Cluster;
use crate::syllable::Syllable;

/// A cluster set aside before grouping, keyed by how many Hebrew clusters
/// preceded it in the word
#[derive(Debug, Clone)]
pub(crate) struct SetAside {
    pub anchor: usize,
    pub cluster: Cluster,
}

/// Splice set-aside clusters back into `syllables`
///
/// A leading run goes to the front of the first syllable. Every other run
/// follows the Hebrew cluster it came after, inside that cluster's syllable,
/// so trailing runs end up on the last syllable. `set_aside` must be in text
/// order.
pub(crate) fn reinsert(syllables: Vec<Syllable>, set_aside: Vec<SetAside>) -> Vec<Syllable> {
    if set_aside.is_empty() {
        return syllables;
    }

    let mut pending = set_aside.into_iter().peekable();
    let mut seen = 0;
    let mut out = Vec::with_capacity(syllables.len());

    for (s, syllable) in syllables.into_iter().enumerate() {
        let start = seen;
        let end = seen + syllable.clusters().len();
        seen = end;

        let touched = pending
            .peek()
            .is_some_and(|p| p.anchor <= end && (p.anchor > start || s == 0));
        if !touched {
            out.push(syllable);
            continue;
        }

        let mut clusters = Vec::with_capacity(syllable.clusters().len() + 1);
        let mut h = start;
        while let Some(p) = pending.next_if(|p| p.anchor == h) {
            clusters.push(p.cluster);
        }
        for cluster in syllable.clusters() {
            clusters.push(cluster.clone());
            h += 1;
            while let Some(p) = pending.next_if(|p| p.anchor == h) {
                clusters.push(p.cluster);
            }
        }
        out.push(syllable.with_clusters(clusters));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(clusters: &[&str]) -> Syllable {
        Syllable::new(clusters.iter().map(|c| Cluster::new(c)).collect(), false)
    }

    fn aside(anchor: usize, text: &str) -> SetAside {
        SetAside {
            anchor,
            cluster: Cluster::new(text),
        }
    }

    fn texts(syls: &[Syllable]) -> Vec<String> {
        syls.iter().map(Syllable::text).collect()
    }

    #[test]
    fn test_leading_and_trailing() {
        let syls = vec![syl(&["\u{05D3}\u{05B8}"]), syl(&["\u{05D1}\u{05B8}", "\u{05E8}"])];
        let out = reinsert(syls, vec![aside(0, "("), aside(3, ")")]);
        assert_eq!(
            texts(&out),
            vec!["(\u{05D3}\u{05B8}", "\u{05D1}\u{05B8}\u{05E8})"]
        );
    }

    #[test]
    fn test_interior_follows_preceding_cluster() {
        let syls = vec![syl(&["\u{05D3}\u{05B8}"]), syl(&["\u{05D1}\u{05B8}", "\u{05E8}"])];
        let out = reinsert(syls, vec![aside(1, "*"), aside(2, "-")]);
        assert_eq!(
            texts(&out),
            vec!["\u{05D3}\u{05B8}*", "\u{05D1}\u{05B8}-\u{05E8}"]
        );
    }

    #[test]
    fn test_flags_survive() {
        let mut first = syl(&["\u{05D3}\u{05B8}"]);
        first.set_accented(true);
        first.set_final(true);
        let out = reinsert(vec![first], vec![aside(1, "!")]);
        assert!(out[0].is_accented() && out[0].is_final());
        assert_eq!(out[0].clusters().len(), 2);
    }
}
