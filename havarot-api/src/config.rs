//! Configuration API for syllabification
//!
//! [`Config`] wraps the strict [`SylOpts`] record the engine consumes.
//! [`ConfigBuilder`] is the loosely-typed side: it accepts string keys and
//! values (from the command line or a TOML file) and rejects anything it
//! does not recognise with [`Error::Configuration`].

use std::path::Path;

use havarot_core::{HolemHaser, SylOpts};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    use havarot_core::SylOpts;

    /// Options used when nothing is configured
    pub const OPTIONS: SylOpts = SylOpts::DEFAULT;

    /// Name of the TOML table holding the options
    pub const TOML_TABLE: &str = "syllabification";
}

/// One configurable option: its canonical key, how to render it and how to
/// parse it
struct OptionSpec {
    key: &'static str,
    get: fn(&SylOpts) -> String,
    set: fn(&mut SylOpts, &str, &str) -> Result<()>,
}

/// Every option, in canonical snake_case key order
const OPTION_SPECS: [OptionSpec; 8] = [
    OptionSpec {
        key: "article",
        get: |o| o.article.to_string(),
        set: |o, k, v| {
            o.article = parse_bool(k, v)?;
            Ok(())
        },
    },
    OptionSpec {
        key: "holem_haser",
        get: |o| holem_haser_name(o.holem_haser).to_string(),
        set: |o, _, v| {
            o.holem_haser = parse_holem_haser(v)?;
            Ok(())
        },
    },
    OptionSpec {
        key: "long_vowels",
        get: |o| o.long_vowels.to_string(),
        set: |o, k, v| {
            o.long_vowels = parse_bool(k, v)?;
            Ok(())
        },
    },
    OptionSpec {
        key: "qamets_qatan",
        get: |o| o.qamets_qatan.to_string(),
        set: |o, k, v| {
            o.qamets_qatan = parse_bool(k, v)?;
            Ok(())
        },
    },
    OptionSpec {
        key: "sheva_after_meteg",
        get: |o| o.sheva_after_meteg.to_string(),
        set: |o, k, v| {
            o.sheva_after_meteg = parse_bool(k, v)?;
            Ok(())
        },
    },
    OptionSpec {
        key: "sqnmlvy",
        get: |o| o.sqnmlvy.to_string(),
        set: |o, k, v| {
            o.sqnmlvy = parse_bool(k, v)?;
            Ok(())
        },
    },
    OptionSpec {
        key: "strict",
        get: |o| o.strict.to_string(),
        set: |o, k, v| {
            o.strict = parse_bool(k, v)?;
            Ok(())
        },
    },
    OptionSpec {
        key: "waw_shureq",
        get: |o| o.waw_shureq.to_string(),
        set: |o, k, v| {
            o.waw_shureq = parse_bool(k, v)?;
            Ok(())
        },
    },
];

/// Every option key, in canonical snake_case
pub fn option_keys() -> impl Iterator<Item = &'static str> {
    OPTION_SPECS.iter().map(|spec| spec.key)
}

/// Syllabification configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) options: SylOpts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: defaults::OPTIONS,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The resolved engine options
    pub fn options(&self) -> &SylOpts {
        &self.options
    }

    /// Parse a `[syllabification]` table from TOML
    ///
    /// A document without the table yields the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::builder().toml_str(source)?.build()
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Current value of every option as `(key, value)` strings
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        OPTION_SPECS
            .iter()
            .map(|spec| (spec.key, (spec.get)(&self.options)))
            .collect()
    }
}

impl From<SylOpts> for Config {
    fn from(options: SylOpts) -> Self {
        Self { options }
    }
}

/// Raw TOML document shape
#[derive(Debug, Deserialize)]
struct ConfigFile {
    syllabification: Option<toml::Table>,
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    options: SylOpts,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article(mut self, value: bool) -> Self {
        self.options.article = value;
        self
    }

    pub fn holem_haser(mut self, value: HolemHaser) -> Self {
        self.options.holem_haser = value;
        self
    }

    pub fn long_vowels(mut self, value: bool) -> Self {
        self.options.long_vowels = value;
        self
    }

    pub fn qamets_qatan(mut self, value: bool) -> Self {
        self.options.qamets_qatan = value;
        self
    }

    pub fn sheva_after_meteg(mut self, value: bool) -> Self {
        self.options.sheva_after_meteg = value;
        self
    }

    pub fn sqnmlvy(mut self, value: bool) -> Self {
        self.options.sqnmlvy = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn waw_shureq(mut self, value: bool) -> Self {
        self.options.waw_shureq = value;
        self
    }

    /// Set an option from strings
    ///
    /// Keys are matched ignoring case, `_` and `-`, so `long_vowels`,
    /// `longVowels` and `long-vowels` are the same key. Booleans accept
    /// `true/false`, `yes/no` and `1/0`.
    pub fn set(mut self, key: &str, value: &str) -> Result<Self> {
        let wanted = normalize_key(key);
        let spec = OPTION_SPECS
            .iter()
            .find(|spec| normalize_key(spec.key) == wanted)
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "unknown option '{key}' (expected one of: {})",
                    option_keys().collect::<Vec<_>>().join(", ")
                ))
            })?;
        (spec.set)(&mut self.options, key, value)?;
        Ok(self)
    }

    /// Apply a `key=value` pair
    pub fn set_pair(self, pair: &str) -> Result<Self> {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            Error::Configuration(format!("expected key=value, got '{pair}'"))
        })?;
        self.set(key.trim(), value.trim())
    }

    /// Apply the `[syllabification]` table of a TOML document
    pub fn toml_str(mut self, source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)
            .map_err(|e| Error::Configuration(format!("invalid TOML: {e}")))?;
        let Some(table) = file.syllabification else {
            tracing::debug!(table = defaults::TOML_TABLE, "no options table, using defaults");
            return Ok(self);
        };
        for (key, value) in &table {
            let value = match value {
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                other => {
                    return Err(Error::Configuration(format!(
                        "option '{key}' has unsupported value {other}"
                    )))
                }
            };
            self = self.set(key, &value)?;
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let options = self.options;
        tracing::debug!(?options, "configuration built");
        Ok(Config { options })
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(Error::Configuration(format!(
            "option '{key}' expects a boolean, got '{value}'"
        ))),
    }
}

fn parse_holem_haser(value: &str) -> Result<HolemHaser> {
    match normalize_key(value).as_str() {
        "keep" => Ok(HolemHaser::Keep),
        "remove" => Ok(HolemHaser::Remove),
        "preventpresume" => Ok(HolemHaser::PreventPresume),
        _ => Err(Error::Configuration(format!(
            "holem_haser must be keep, remove or prevent-presume, got '{value}'"
        ))),
    }
}

fn holem_haser_name(value: HolemHaser) -> &'static str {
    match value {
        HolemHaser::Keep => "keep",
        HolemHaser::Remove => "remove",
        HolemHaser::PreventPresume => "prevent-presume",
    }
}
