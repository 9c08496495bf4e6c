//! Text preprocessing
//!
//! Everything that has to happen before the engine sees a word: canonical
//! decomposition, holem haser handling, word splitting, cluster sequencing,
//! holem-waw repair and qamets qatan substitution.

use std::borrow::Cow;

use havarot_core::chars::{self, cp, CharCategory};
use havarot_core::{split_clusters, Cluster, HolemHaser, SylOpts};
use unicode_normalization::UnicodeNormalization;

use crate::qamets_qatan;

/// Canonical decomposition, plus the text-level holem haser rewrite
pub fn decompose(text: &str, holem_haser: HolemHaser) -> String {
    let decomposed = text.nfd();
    match holem_haser {
        HolemHaser::Remove => decomposed
            .map(|c| {
                if c == cp::HOLAM_HASER_FOR_VAV {
                    cp::HOLAM
                } else {
                    c
                }
            })
            .collect(),
        HolemHaser::Keep | HolemHaser::PreventPresume => decomposed.collect(),
    }
}

/// Split text into words
///
/// Whitespace separates words; a maqaf ends a word and stays attached to it.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .flat_map(|token| token.split_inclusive(cp::MAQAF))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Turn one decomposed word into sequenced, repaired clusters
pub fn word_clusters(word: &str, opts: &SylOpts) -> Vec<Cluster> {
    let word = move_jerusalem_hiriq(word);
    let mut clusters = split_clusters(&word);
    if opts.holem_haser == HolemHaser::PreventPresume {
        mark_consonantal_vav(&mut clusters);
    }
    move_holem_waw(&mut clusters);

    if opts.qamets_qatan {
        let text: String = clusters.iter().map(Cluster::text).collect();
        if let Cow::Owned(rewritten) = qamets_qatan::apply(&text) {
            clusters = split_clusters(&rewritten);
        }
    }
    clusters
}

/// Sequence the extra hiriq of ירושלם after the patah
///
/// Decomposition puts the hiriq of a lamed carrying both hiriq and patah
/// first. When a final mem follows, the hiriq is moved to sit directly before
/// the mem so the cluster split gives it a cluster of its own.
pub fn move_jerusalem_hiriq(word: &str) -> Cow<'_, str> {
    if !word.contains(cp::LAMED) || !word.contains(cp::FINAL_MEM) {
        return Cow::Borrowed(word);
    }
    let mut text: Vec<char> = word.chars().collect();
    let mut changed = false;
    for start in 0..text.len() {
        if text[start] != cp::LAMED {
            continue;
        }
        let Some(end) = text[start + 1..]
            .iter()
            .position(|&c| chars::classify(c) == CharCategory::Consonant)
            .map(|offset| start + 1 + offset)
        else {
            break;
        };
        let marks = &text[start + 1..end];
        if text[end] != cp::FINAL_MEM || !marks.contains(&cp::PATAH) {
            continue;
        }
        let hiriq = marks.iter().position(|&c| c == cp::HIRIQ);
        if let Some(offset) = hiriq {
            let hiriq = text.remove(start + 1 + offset);
            text.insert(end - 1, hiriq);
            changed = true;
        }
    }
    if changed {
        Cow::Owned(text.into_iter().collect())
    } else {
        Cow::Borrowed(word)
    }
}

/// True if any Hebrew vowel point (sheva included) occurs in `text`
pub fn has_vowel_points(text: &str) -> bool {
    text.chars()
        .any(|c| c == cp::SHEVA || havarot_core::chars::is_vowel_mark(c))
}

fn is_vav_with_holam(cluster: &Cluster) -> bool {
    cluster.consonant() == Some(cp::VAV)
        && cluster.contains(cp::HOLAM)
        && !cluster.has_dagesh()
        && cluster
            .chars()
            .iter()
            .filter(|c| havarot_core::chars::is_vowel_mark(c.value()))
            .count()
            == 1
}

/// A holam on a vav that follows a voweled cluster belongs to the vav
fn mark_consonantal_vav(clusters: &mut [Cluster]) {
    for i in 1..clusters.len() {
        if is_vav_with_holam(&clusters[i]) && clusters[i - 1].has_vowel() {
            let text = clusters[i]
                .text()
                .replace(cp::HOLAM, &cp::HOLAM_HASER_FOR_VAV.to_string());
            clusters[i] = Cluster::new(&text);
        }
    }
}

/// Move a holam written on a vav back to the vowelless consonant before it
fn move_holem_waw(clusters: &mut [Cluster]) {
    for i in 1..clusters.len() {
        let prev = &clusters[i - 1];
        let movable = is_vav_with_holam(&clusters[i])
            && prev.consonant().is_some()
            && !prev.has_vowel()
            && !prev.has_sheva();
        if !movable {
            continue;
        }
        let mut prev_text = prev.text().to_string();
        prev_text.push(cp::HOLAM);
        let vav_text: String = clusters[i]
            .text()
            .chars()
            .filter(|&c| c != cp::HOLAM)
            .collect();
        clusters[i - 1] = Cluster::new(&prev_text);
        clusters[i] = Cluster::new(&vav_text);
    }
}
