//! havarot: syllabify vowel-pointed Biblical Hebrew from the command line

use clap::Parser;
use havarot_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(
    name = "havarot",
    author,
    version,
    about = "Syllabification of vowel-pointed Biblical Hebrew",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_names() {
        let cli = Cli::try_parse_from(["havarot", "list", "names", "vowels"]).unwrap();
        assert!(matches!(cli.command, Commands::List { .. }));
    }
}
