//! Basic usage of the havarot API

use havarot_api::{syllabify, Config, Text};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience function with default options
    println!("=== Method 1: Convenience Function ===");
    let words = syllabify("בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים")?;
    for syllables in &words {
        let parts: Vec<String> = syllables.iter().map(|s| s.text()).collect();
        println!("  {}", parts.join("·"));
    }

    // Method 2: Options from key/value pairs
    println!("\n=== Method 2: Custom Options ===");
    let config = Config::builder()
        .set("sqnmlvy", "false")?
        .set("strict", "no")?
        .build()?;
    let text = Text::with_config("וַיְצַחֵק֙", config)?;
    for syllable in text.syllables()? {
        println!(
            "  {} closed={} accented={}",
            syllable.text(),
            syllable.is_closed(),
            syllable.is_accented()
        );
    }

    // Method 3: Options from TOML
    println!("\n=== Method 3: TOML Configuration ===");
    let config = Config::from_toml_str("[syllabification]\nlongVowels = false\n")?;
    let text = Text::with_config("שָׁמְרוּ", config)?;
    println!("  {} syllables", text.syllables()?.len());

    Ok(())
}
