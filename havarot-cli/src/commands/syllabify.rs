//! Syllabify command implementation

use anyhow::{Context, Result};
use clap::Args;
use havarot_api::{Config, Text};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};

/// Arguments for the syllabify command
#[derive(Debug, Args)]
pub struct SyllabifyArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Text to syllabify instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file with a [syllabification] table
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override one option, e.g. --set strict=false (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One word per line, syllables separated by a middle dot
    Text,
    /// JSON array of words with syllable flags
    Json,
    /// Markdown table per word
    Markdown,
}

impl OutputFormat {
    fn formatter<W: Write + Send + Sync + 'static>(self, writer: W) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl SyllabifyArgs {
    /// Execute the syllabify command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting syllabification");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let sources = self.read_sources()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.format.formatter(writer);

        for (name, source) in &sources {
            if source.trim().is_empty() {
                log::warn!("{name}: empty input, skipped");
                continue;
            }
            let text = Text::with_config(source, config).with_context(|| name.clone())?;
            let per_word = text.syllabify().with_context(|| name.clone())?;
            log::info!("{name}: {} word(s)", per_word.len());
            for (word, syllables) in text.words().iter().zip(&per_word) {
                formatter.format_word(word.text(), syllables)?;
            }
        }

        formatter.finish()
    }

    /// Config file first, then `--set` overrides in order
    fn load_config(&self) -> Result<Config> {
        let mut builder = Config::builder();
        if let Some(path) = &self.config {
            let source = FileReader::read_text(path)?;
            builder = builder
                .toml_str(&source)
                .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        }
        for pair in &self.set {
            builder = builder
                .set_pair(pair)
                .map_err(|e| CliError::ConfigError(e.to_string()))?;
        }
        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        log::debug!("options: {:?}", config.options());
        Ok(config)
    }

    /// `(label, text)` for each input
    fn read_sources(&self) -> Result<Vec<(String, String)>> {
        if let Some(text) = &self.text {
            return Ok(vec![("<text>".to_string(), text.clone())]);
        }
        if self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }
        resolve_patterns(&self.input)?
            .into_iter()
            .map(|path| {
                let text = FileReader::read_text(&path)?;
                Ok((path.display().to_string(), text))
            })
            .collect()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a second init in the same process (tests) is not an error
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
