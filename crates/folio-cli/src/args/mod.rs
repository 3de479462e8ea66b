// NOTE: Commands are namespaced by what they edit (style, colors, details,
// pages, ...) so `--help` reads like the builder's own steps.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build a personal portfolio site from a style, a palette and your details", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $FOLIO_PATH, then the system data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
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
    fn test_pages_move_parses_positions() {
        let cli = Cli::try_parse_from(["folio", "pages", "move", "4", "1"]).unwrap();
        match cli.command {
            Some(Commands::Pages {
                command: PagesCommand::Move { from, to },
            }) => {
                assert_eq!((from, to), (4, 1));
            }
            _ => panic!("expected pages move"),
        }
    }

    #[test]
    fn test_wizard_combo_conflicts_with_custom_colors() {
        let result = Cli::try_parse_from([
            "folio", "wizard", "--style", "minimal", "--combo", "Forest", "--primary", "#000",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "pages", "list", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
