//! Property-based tests using proptest

use havarot_core::chars::{classify, CharCategory};
use havarot_core::{split_clusters, CoreError, SylOpts, Syllabifier, Syllable};
use proptest::prelude::*;

const CONSONANTS: &[char] = &[
    '\u{05D0}', '\u{05D1}', '\u{05D3}', '\u{05D4}', '\u{05D5}', '\u{05D9}', '\u{05DB}',
    '\u{05DC}', '\u{05DE}', '\u{05E0}', '\u{05E7}', '\u{05E8}', '\u{05EA}', '\u{05DD}',
];

// sheva, hataf patah, hiriq, tsere, segol, patah, qamats, holam
const VOWELS: &[char] = &[
    '\u{05B0}', '\u{05B2}', '\u{05B4}', '\u{05B5}', '\u{05B6}', '\u{05B7}', '\u{05B8}',
    '\u{05B9}',
];

// etnahta, pashta, tipeha, merkha, telisha qetana, segolta
const TAAMIM: &[char] = &['\u{0591}', '\u{0599}', '\u{0596}', '\u{05A5}', '\u{05A9}', '\u{0592}'];

/// One cluster in canonical order: consonant, dagesh, vowel, taam
fn cluster() -> impl Strategy<Value = String> {
    (
        prop::sample::select(CONSONANTS),
        any::<bool>(),
        prop::option::of(prop::sample::select(VOWELS)),
        prop::option::weighted(0.2, prop::sample::select(TAAMIM)),
    )
        .prop_map(|(consonant, dagesh, vowel, taam)| {
            let mut s = String::new();
            s.push(consonant);
            if dagesh {
                s.push('\u{05BC}');
            }
            s.extend(vowel);
            s.extend(taam);
            s
        })
}

fn word() -> impl Strategy<Value = String> {
    (
        prop::option::of(Just("(")),
        prop::collection::vec(cluster(), 1..8),
        prop::option::of(Just(").")),
    )
        .prop_map(|(open, body, close)| {
            let mut s = String::new();
            s.extend(open);
            s.extend(body);
            s.extend(close);
            s
        })
}

fn lenient() -> SylOpts {
    SylOpts {
        strict: false,
        ..SylOpts::default()
    }
}

fn check_invariants(word: &str, syls: &[Syllable]) -> Result<(), TestCaseError> {
    prop_assert!(!syls.is_empty());

    let text: String = syls.iter().map(Syllable::text).collect();
    prop_assert_eq!(&text, word);

    let clusters: usize = syls.iter().map(|s| s.clusters().len()).sum();
    prop_assert_eq!(clusters, split_clusters(word).len());

    let finals: Vec<bool> = syls.iter().map(Syllable::is_final).collect();
    prop_assert_eq!(finals.iter().filter(|&&f| f).count(), 1);
    prop_assert!(finals[finals.len() - 1]);

    prop_assert!(syls.iter().any(Syllable::is_accented));
    prop_assert!(syls.iter().all(|s| !s.clusters().is_empty()));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_lenient_invariants(word in word()) {
        let syls = Syllabifier::new(lenient()).syllabify_word(&word).unwrap();
        check_invariants(&word, &syls)?;
    }

    #[test]
    fn test_strict_is_ok_or_structural(word in word()) {
        match Syllabifier::new(SylOpts::default()).syllabify_word(&word) {
            Ok(syls) => check_invariants(&word, &syls)?,
            Err(CoreError::StructuralViolation { word: reported, .. }) => {
                prop_assert!(word.contains(reported.as_str()));
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn test_strict_and_lenient_agree_when_strict_succeeds(word in word()) {
        if let Ok(strict) = Syllabifier::new(SylOpts::default()).syllabify_word(&word) {
            let lenient = Syllabifier::new(lenient()).syllabify_word(&word).unwrap();
            prop_assert_eq!(strict, lenient);
        }
    }

    #[test]
    fn test_classification_is_pure(ch in any::<char>()) {
        let first = classify(ch);
        prop_assert_eq!(first, classify(ch));
        if first == CharCategory::Other {
            prop_assert_eq!(first.rank(), 10);
        }
    }
}
