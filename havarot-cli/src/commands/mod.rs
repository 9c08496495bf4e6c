//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod syllabify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Syllabify vowel-pointed Hebrew text
    Syllabify(syllabify::SyllabifyArgs),

    /// List options, output formats or character names
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List syllabification options and their defaults
    Options,

    /// List available output formats
    Formats,

    /// List the names of one character table
    Names {
        #[arg(value_enum)]
        table: list::NameTable,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Syllabify(args) => args.execute(),
            Commands::List { subcommand } => {
                let mut stdout = std::io::stdout().lock();
                match subcommand {
                    ListCommands::Options => list::write_options(&mut stdout),
                    ListCommands::Formats => list::write_formats(&mut stdout),
                    ListCommands::Names { table } => list::write_names(&mut stdout, *table),
                }
            }
        }
    }
}
