//! Closed, accented and final flags

use crate::chain::{Chain, Node};
use crate::chars::{cp, TaamName, VowelName};
use crate::cluster::Cluster;
use crate::syllable::Syllable;

use super::grouping::Draft;

/// Materialize drafts into syllables and set their flags
///
/// `clusters` is the Hebrew-only chain the drafts index into.
pub(crate) fn annotate(clusters: &Chain<Cluster>, drafts: Vec<Draft>) -> Vec<Syllable> {
    if drafts.is_empty() {
        return Vec::new();
    }

    // cluster index -> owning syllable index
    let mut owner = vec![0; clusters.len()];
    for (s, draft) in drafts.iter().enumerate() {
        for &c in &draft.clusters {
            owner[c] = s;
        }
    }

    let silluq: Vec<bool> = clusters.nodes().map(|n| n.has_silluq()).collect();
    let marked: Vec<bool> = drafts
        .iter()
        .map(|d| {
            d.clusters
                .iter()
                .any(|&c| clusters[c].has_accent_mark() || silluq[c])
        })
        .collect();
    let last_cluster: Vec<Option<usize>> =
        drafts.iter().map(|d| d.clusters.last().copied()).collect();

    let mut syllables: Chain<Syllable> = drafts
        .into_iter()
        .map(|d| {
            let run = d.clusters.iter().map(|&c| clusters[c].clone()).collect();
            Syllable::new(run, d.closed)
        })
        .collect();
    let count = syllables.len();

    let closed: Vec<bool> = syllables
        .nodes()
        .map(|node| {
            let next_doubled = last_cluster[node.index()]
                .and_then(|c| clusters.next(c))
                .filter(|&next| owner[next] != node.index())
                .is_some_and(|next| clusters[next].has_doubling_dagesh());
            node.is_closed() || (!node.is_last() && is_closable(&node) && next_doubled)
        })
        .collect();
    let accented = assign_accents(&syllables, &marked);

    for (index, (closed, accented)) in closed.into_iter().zip(accented).enumerate() {
        if let Some(syl) = syllables.get_mut(index) {
            syl.set_closed(closed);
            syl.set_accented(accented);
            syl.set_final(index + 1 == count);
        }
    }
    syllables.into_vec()
}

/// Has a short vowel, or all but one of its clusters lack a vowel
fn is_closable(syl: &Syllable) -> bool {
    let clusters = syl.clusters();
    let vowelless = clusters.iter().filter(|c| !c.has_vowel()).count();
    clusters.iter().any(Cluster::has_short_vowel) || vowelless + 1 == clusters.len()
}

fn assign_accents(syllables: &Chain<Syllable>, marked: &[bool]) -> Vec<bool> {
    let mut accented = vec![false; syllables.len()];

    for node in syllables.nodes() {
        let index = node.index();

        if node.has_taam_name(TaamName::Segolta) {
            let target = if node.is_last() {
                node.predecessors()
                    .find(|p| p.has_taam_name(TaamName::Segolta))
                    .map_or(index, |p| p.index())
            } else {
                index
            };
            accented[target] = true;
        } else if node.is_last() && node.has_taam_name(TaamName::Pashta) {
            let prepositive = node.predecessors().any(|p| {
                p.has_taam_name(TaamName::Pashta) || p.has_taam_name(TaamName::Qadma)
            });
            if !prepositive {
                accented[index] |= marked[index];
            }
        } else if node.has_taam_name(TaamName::TelishaQetana) {
            let telisha = |n: &Node<'_, Syllable>| n.has_taam_name(TaamName::TelishaQetana);
            let target = match (node.prev(), node.next()) {
                (Some(prev), _) if telisha(&prev) => prev.index(),
                (_, Some(next)) if telisha(&next) => index,
                (Some(prev), _) => prev.index(),
                (None, _) => index,
            };
            accented[target] = true;
        } else {
            accented[index] |= marked[index];
        }

        if let Some(prev) = node.prev() {
            if is_jerusalem_ending(&node) && prev.has_vowel_name(VowelName::Patah) {
                accented[prev.index()] = true;
            }
        }
    }

    if !accented.contains(&true) {
        if let Some(last) = accented.last_mut() {
            *last = true;
        }
    }
    accented
}

/// A consonant-less hiriq cluster ahead of a final mem
fn is_jerusalem_ending(syl: &Syllable) -> bool {
    let clusters = syl.clusters();
    clusters.first().is_some_and(|first| {
        first.consonant().is_none() && first.contains(cp::HIRIQ)
    }) && clusters
        .iter()
        .any(|c| c.consonant() == Some(cp::FINAL_MEM))
}
