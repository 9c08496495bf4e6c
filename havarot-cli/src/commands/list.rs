//! List command implementation

use anyhow::Result;
use clap::ValueEnum;
use havarot_api::{Config, ConsonantName, TaamName, VowelName};
use std::io::Write;

use super::syllabify::OutputFormat;

/// Character name tables
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NameTable {
    Consonants,
    Vowels,
    Taamim,
}

/// Every option with its default value
pub fn write_options(out: &mut impl Write) -> Result<()> {
    for (key, value) in Config::default().entries() {
        writeln!(out, "{key:<18} {value}")?;
    }
    Ok(())
}

pub fn write_formats(out: &mut impl Write) -> Result<()> {
    for format in OutputFormat::value_variants() {
        if let Some(value) = format.to_possible_value() {
            let help = value.get_help().map(ToString::to_string).unwrap_or_default();
            writeln!(out, "{:<10} {help}", value.get_name())?;
        }
    }
    Ok(())
}

/// One line per name: name, code point, character
pub fn write_names(out: &mut impl Write, table: NameTable) -> Result<()> {
    let rows: Vec<(String, char)> = match table {
        NameTable::Consonants => ConsonantName::all().map(|n| (n.to_string(), n.char())).collect(),
        NameTable::Vowels => VowelName::all().map(|n| (n.to_string(), n.char())).collect(),
        NameTable::Taamim => TaamName::all().map(|n| (n.to_string(), n.char())).collect(),
    };
    for (name, ch) in rows {
        writeln!(out, "{name:<24} U+{:04X}  {ch}", ch as u32)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_options_list_defaults() {
        let out = render(|o| write_options(o));
        assert_eq!(out.lines().count(), 8);
        assert!(out.contains("strict"));
        assert!(out.contains("holem_haser"));
    }

    #[test]
    fn test_vowel_names() {
        let out = render(|o| write_names(o, NameTable::Vowels));
        assert!(out.contains("QAMATS"));
        assert!(out.contains("U+05B8"));
    }

    #[test]
    fn test_formats() {
        let out = render(|o| write_formats(o));
        assert!(out.contains("text"));
        assert!(out.contains("json"));
        assert!(out.contains("markdown"));
    }
}
