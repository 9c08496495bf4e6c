//! Texts: the entry point for syllabifying running text

use havarot_core::{Char, Cluster, Syllable};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::normalize;
use crate::word::Word;

/// A normalized text split into words
#[derive(Debug, Clone)]
pub struct Text {
    original: String,
    config: Config,
    words: Vec<Word>,
}

impl Text {
    /// Normalize `input` with the default configuration
    pub fn new(input: &str) -> Result<Self> {
        Self::with_config(input, Config::default())
    }

    /// Normalize `input` with a specific configuration
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the text carries no vowel points at all.
    pub fn with_config(input: &str, config: Config) -> Result<Self> {
        let options = *config.options();
        let decomposed = normalize::decompose(input, options.holem_haser);
        if !normalize::has_vowel_points(&decomposed) {
            return Err(Error::InvalidInput(
                "text must include vowel points".to_string(),
            ));
        }

        let words: Vec<Word> = normalize::split_words(&decomposed)
            .into_iter()
            .map(|w| Word::new(w, options))
            .collect();
        tracing::debug!(words = words.len(), "text normalized");

        Ok(Self {
            original: input.to_string(),
            config,
            words,
        })
    }

    /// The input as given
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Normalized words joined by single spaces
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            // words split off at a maqaf run on without a space
            let joined = i > 0 && !self.words[i - 1].is_in_construct();
            if joined {
                out.push(' ');
            }
            out.push_str(word.text());
        }
        out
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Syllables of every word, word by word
    #[cfg(feature = "parallel")]
    pub fn syllabify(&self) -> Result<Vec<Vec<Syllable>>> {
        use rayon::prelude::*;

        self.words.par_iter().map(Word::syllables).collect()
    }

    /// Syllables of every word, word by word
    #[cfg(not(feature = "parallel"))]
    pub fn syllabify(&self) -> Result<Vec<Vec<Syllable>>> {
        self.words.iter().map(Word::syllables).collect()
    }

    /// All syllables of the text in order
    pub fn syllables(&self) -> Result<Vec<Syllable>> {
        Ok(self.syllabify()?.into_iter().flatten().collect())
    }

    pub fn clusters(&self) -> Vec<Cluster> {
        self.words
            .iter()
            .flat_map(|w| w.cluster_slice().iter().cloned())
            .collect()
    }

    pub fn chars(&self) -> Vec<Char> {
        self.words.iter().flat_map(|w| w.chars().copied()).collect()
    }

    /// Syllabify and render as a JSON array of `{ text, syllables }` words
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        #[derive(serde::Serialize)]
        struct WordJson<'a> {
            text: &'a str,
            syllables: Vec<Syllable>,
        }

        let words = self
            .words
            .iter()
            .zip(self.syllabify()?)
            .map(|(word, syllables)| WordJson {
                text: word.text(),
                syllables,
            })
            .collect::<Vec<_>>();
        Ok(serde_json::to_string_pretty(&words)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpointed_text_is_invalid() {
        let err = Text::new("\u{05D3}\u{05D1}\u{05E8}").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_words_and_text() {
        let input = concat!(
            "\u{05DB}\u{05BC}\u{05B8}\u{05DC}\u{05BE}",
            "\u{05D0}\u{05B8}\u{05D3}\u{05B8}\u{05DD}  \u{05D9}\u{05B8}\u{05DD}"
        );
        let text = Text::new(input).unwrap();
        assert_eq!(text.words().len(), 3);
        assert!(text.words()[0].is_in_construct());
        // kol- is read with qamets qatan
        assert!(text.text().starts_with("\u{05DB}\u{05BC}\u{05C7}\u{05DC}\u{05BE}\u{05D0}"));
        assert!(text.text().ends_with(" \u{05D9}\u{05B8}\u{05DD}"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json() {
        let text = Text::new("\u{05D9}\u{05B8}\u{05DD}").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text.to_json().unwrap()).unwrap();
        let syllable = &value[0]["syllables"][0];
        assert_eq!(syllable["text"], "\u{05D9}\u{05B8}\u{05DD}");
        assert_eq!(syllable["is_closed"], true);
        assert_eq!(syllable["is_final"], true);
    }

    #[test]
    fn test_syllables_flatten_words() {
        let input = "\u{05D3}\u{05BC}\u{05B8}\u{05D1}\u{05B8}\u{05E8} \u{05D9}\u{05B8}\u{05DD}";
        let text = Text::new(input).unwrap();
        let per_word = text.syllabify().unwrap();
        assert_eq!(per_word.len(), 2);
        assert_eq!(text.syllables().unwrap().len(), 3);
        assert_eq!(text.clusters().len(), 5);
        assert_eq!(text.chars().len(), 9);
    }
}
