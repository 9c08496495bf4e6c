//! Qamets qatan lexical patterns
//!
//! The pattern table is embedded at compile time and compiled once on first
//! use.

use std::borrow::Cow;
use std::sync::OnceLock;

use havarot_core::chars::cp;
use regex::{Captures, Regex};
use serde::Deserialize;

/// One compiled pattern
#[derive(Debug)]
pub struct QametsQatanRule {
    pub name: String,
    pub description: String,
    regex: Regex,
}

impl QametsQatanRule {
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

#[derive(Debug, Deserialize)]
struct PatternFile {
    pattern: Vec<PatternDef>,
}

#[derive(Debug, Deserialize)]
struct PatternDef {
    name: String,
    #[serde(default)]
    description: String,
    regex: String,
}

static RULES: OnceLock<Vec<QametsQatanRule>> = OnceLock::new();

/// The embedded rules, compiled on first access
pub fn rules() -> &'static [QametsQatanRule] {
    RULES.get_or_init(|| {
        load_rules(include_str!("../configs/qamets_qatan.toml")).unwrap_or_else(|e| {
            tracing::warn!("failed to load qamets qatan patterns: {e}");
            Vec::new()
        })
    })
}

fn load_rules(source: &str) -> Result<Vec<QametsQatanRule>, String> {
    let file: PatternFile =
        toml::from_str(source).map_err(|e| format!("failed to parse pattern table: {e}"))?;
    file.pattern
        .into_iter()
        .map(|def| {
            let regex = Regex::new(&def.regex)
                .map_err(|e| format!("pattern '{}' is invalid: {e}", def.name))?;
            Ok(QametsQatanRule {
                name: def.name,
                description: def.description,
                regex,
            })
        })
        .collect()
}

/// Rewrite every qamats inside a matching pattern as qamets qatan
///
/// `word` must already be in canonical mark order.
pub fn apply(word: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(word);
    for rule in rules() {
        if !rule.regex.is_match(&out) {
            continue;
        }
        tracing::trace!(rule = %rule.name, word, "qamets qatan");
        let replaced = rule
            .regex
            .replace_all(&out, |caps: &Captures<'_>| {
                caps[0].replace(cp::QAMATS, &cp::QAMATS_QATAN.to_string())
            })
            .into_owned();
        out = Cow::Owned(replaced);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_rules_compile() {
        let rules = rules();
        assert!(rules.len() >= 10);
        assert!(rules.iter().any(|r| r.name == "kol"));
    }

    #[test]
    fn test_kol_in_construct() {
        // כָּל־
        let word = "\u{05DB}\u{05BC}\u{05B8}\u{05DC}\u{05BE}";
        assert_eq!(apply(word), "\u{05DB}\u{05BC}\u{05C7}\u{05DC}\u{05BE}");
    }

    #[test]
    fn test_kol_with_accent_and_no_maqaf_is_untouched() {
        // כָּ֑ל
        let word = "\u{05DB}\u{05BC}\u{05B8}\u{0591}\u{05DC}";
        assert!(matches!(apply(word), Cow::Borrowed(_)));
    }

    #[test]
    fn test_only_qamats_inside_match_changes() {
        // חָכְמָה: the second qamats is outside the pattern
        let word = "\u{05D7}\u{05B8}\u{05DB}\u{05B0}\u{05DE}\u{05B8}\u{05D4}";
        assert_eq!(
            apply(word),
            "\u{05D7}\u{05C7}\u{05DB}\u{05B0}\u{05DE}\u{05B8}\u{05D4}"
        );
    }

    #[test]
    fn test_metheg_blocks_pattern() {
        // חָֽכְמָה (verb, long qamats)
        let word = "\u{05D7}\u{05B8}\u{05BD}\u{05DB}\u{05B0}\u{05DE}\u{05B8}\u{05D4}";
        assert_eq!(apply(word), word);
    }

    #[test]
    fn test_invalid_table_is_an_error() {
        assert!(load_rules("pattern = 3").is_err());
        assert!(load_rules("[[pattern]]\nname = \"x\"\nregex = \"(\"").is_err());
    }
}
