//! Known syllabifications of real words

use havarot_core::{
    split_clusters, Chain, CoreError, SylOpts, Syllabifier, Syllable, ViolationKind,
};

fn syllabify(word: &str, opts: SylOpts) -> Vec<Syllable> {
    Syllabifier::new(opts).syllabify_word(word).unwrap()
}

/// Cluster-canonical form of each part (source literals are not mark-sorted)
fn canon(parts: &[&str]) -> Vec<String> {
    parts
        .iter()
        .map(|p| split_clusters(p).iter().map(|c| c.text()).collect())
        .collect()
}

fn texts(syls: &[Syllable]) -> Vec<String> {
    syls.iter().map(Syllable::text).collect()
}

fn closed(syls: &[Syllable]) -> Vec<bool> {
    syls.iter().map(Syllable::is_closed).collect()
}

fn accented(syls: &[Syllable]) -> Vec<bool> {
    syls.iter().map(Syllable::is_accented).collect()
}

#[test]
fn test_davar_accent_fallback() {
    let syls = syllabify("דָּבָר", SylOpts::default());
    assert_eq!(texts(&syls), canon(&["דָּ", "בָר"]));
    assert_eq!(accented(&syls), vec![false, true]);
    assert_eq!(closed(&syls), vec![false, true]);
}

#[test]
fn test_yam_single_closed_accented() {
    let syls = syllabify("יָ֥ם", SylOpts::default());
    assert_eq!(syls.len(), 1);
    assert!(syls[0].is_closed());
    assert!(syls[0].is_accented());
    assert!(syls[0].is_final());
}

#[test]
fn test_qatil_mater_absorbed() {
    let word = "קָטִיל";
    let clusters = split_clusters(word);
    let chain = Chain::new(clusters);
    let maters: Vec<bool> = chain.nodes().map(|n| n.is_mater()).collect();
    assert_eq!(maters, vec![false, false, true, false]);

    let syls = syllabify(word, SylOpts::default());
    assert_eq!(texts(&syls), canon(&["קָ", "טִיל"]));
}

#[test]
fn test_vayyitshaq_sqnmlvy_off() {
    let opts = SylOpts {
        sqnmlvy: false,
        ..SylOpts::default()
    };
    let syls = syllabify("וַיְצַחֵק֙", opts);
    assert_eq!(texts(&syls), canon(&["וַיְ", "צַ", "חֵק֙"]));
    assert_eq!(closed(&syls), vec![true, false, true]);
}

#[test]
fn test_vayyitshaq_sqnmlvy_on() {
    let syls = syllabify("וַיְצַחֵק֙", SylOpts::default());
    assert_eq!(texts(&syls), canon(&["וַ", "יְ", "צַ", "חֵק֙"]));
    assert_eq!(closed(&syls), vec![false, false, false, true]);
}

#[test]
fn test_strict_shureq_violation() {
    let word = "לְוּדְרְדַּיְל";
    let err = Syllabifier::new(SylOpts::default())
        .syllabify_word(word)
        .unwrap_err();
    match err {
        CoreError::StructuralViolation { kind, cluster, .. } => {
            assert_eq!(kind, ViolationKind::Shureq);
            assert_eq!(vec![cluster], canon(&["וּ"]));
        }
        other => panic!("unexpected error: {other}"),
    }

    let opts = SylOpts {
        strict: false,
        ..SylOpts::default()
    };
    let syls = Syllabifier::new(opts).syllabify_word(word).unwrap();
    let text: String = syls.iter().map(Syllable::text).collect();
    assert_eq!(vec![text], canon(&[word]));
}

#[test]
fn test_shamru_long_vowel_closes_sheva() {
    let syls = syllabify("שָׁמְרוּ", SylOpts::default());
    assert_eq!(texts(&syls), canon(&["שָׁמְ", "רוּ"]));
    assert_eq!(closed(&syls), vec![true, false]);
}

#[test]
fn test_hammelekh_doubling_closes() {
    let syls = syllabify("הַמֶּלֶךְ", SylOpts::default());
    assert_eq!(texts(&syls), canon(&["הַ", "מֶּ", "לֶךְ"]));
    assert_eq!(closed(&syls), vec![true, false, true]);
}

/// יְרוּשָׁלִַם with the lamed's hiriq sequenced after its patah
const YERUSHALAYIM: &str = concat!(
    "\u{05D9}\u{05B0}\u{05E8}\u{05D5}\u{05BC}\u{05E9}\u{05C1}\u{05B8}",
    "\u{05DC}\u{05B7}\u{05B4}\u{05DD}"
);

#[test]
fn test_yerushalayim() {
    let syls = syllabify(YERUSHALAYIM, SylOpts::default());
    assert_eq!(texts(&syls), canon(&["יְ", "רוּ", "שָׁ", "לַ", "ִם"]));
    assert_eq!(accented(&syls), vec![false, false, false, true, false]);
    assert_eq!(texts(&syls).concat(), YERUSHALAYIM);
}

#[test]
fn test_yerushalayim_with_etnahta() {
    let word = YERUSHALAYIM.replace("\u{05B7}\u{05B4}", "\u{05B7}\u{0591}\u{05B4}");
    let syls = syllabify(&word, SylOpts::default());
    assert_eq!(syls.len(), 5);
    assert_eq!(syls[3].text(), "\u{05DC}\u{05B7}\u{0591}");
    assert_eq!(syls[4].text(), "\u{05B4}\u{05DD}");
    assert_eq!(accented(&syls), vec![false, false, false, true, false]);
    assert_eq!(texts(&syls).concat(), word);
}

#[test]
fn test_unsequenced_hiriq_stays_on_lamed() {
    // canonical decomposition order puts the hiriq ahead of the patah
    for word in [
        "\u{05E9}\u{05C1}\u{05B8}\u{05DC}\u{05B4}\u{05B7}\u{05DD}",
        "\u{05E9}\u{05C1}\u{05B8}\u{05DC}\u{05B4}\u{05B7}\u{0591}\u{05DD}",
    ] {
        let syls = syllabify(word, SylOpts::default());
        assert_eq!(syls.len(), 2);
        assert_eq!(texts(&syls).concat(), word);
    }
}

#[test]
fn test_exactly_one_final() {
    let syls = syllabify("הַמֶּלֶךְ", SylOpts::default());
    let finals: Vec<bool> = syls.iter().map(Syllable::is_final).collect();
    assert_eq!(finals, vec![false, false, true]);
}
