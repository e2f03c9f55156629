//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use glossa_common_config::{ConfigLoader, GlossaConfig};

use crate::commands::{GenerateCommand, KeysCommand, LookupCommand};
use crate::error::CliError;

/// Glossa - message bundle tooling
///
/// Generate key enums from `.properties` bundles and look up messages.
#[derive(Debug, Parser)]
#[command(
    name = "glossa",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "GLOSSA_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a key enum from a bundle file
    #[command(visible_alias = "gen")]
    Generate(GenerateCommand),

    /// List the keys of a bundle
    Keys(KeysCommand),

    /// Look up a message in the configured bundle
    Lookup(LookupCommand),
}

/// Shared state handed to every command.
#[derive(Debug)]
pub struct CommandContext {
    pub config: GlossaConfig,
    pub format: OutputFormat,
}

impl Cli {
    /// Load configuration from the given file or `glossa.yaml` in the working directory
    pub fn load_config(&self) -> Result<GlossaConfig, CliError> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::default(),
        };
        tracing::debug!(path = %loader.config_path().display(), "loading configuration");
        Ok(loader.load()?)
    }

    /// Execute the selected command
    pub fn execute(self, config: GlossaConfig) -> Result<(), CliError> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Command::Generate(cmd) => cmd.execute(&ctx),
            Command::Keys(cmd) => cmd.execute(&ctx),
            Command::Lookup(cmd) => cmd.execute(&ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from([
            "glossa", "--format", "json", "lookup", "args", "3", "Bob", "--locale", "de",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Lookup(cmd) => {
                assert_eq!(cmd.key, "args");
                assert_eq!(cmd.args, vec!["3", "Bob"]);
                assert_eq!(cmd.locale.as_deref(), Some("de"));
            }
            other => panic!("Expected lookup, got {other:?}"),
        }
    }

    #[test]
    fn test_keys_values_alongside_verbose() {
        let cli = Cli::try_parse_from(["glossa", "-v", "keys", "--values", "nls.properties"]).unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Keys(cmd) => {
                assert!(cmd.values);
                assert_eq!(cmd.file, Some(PathBuf::from("nls.properties")));
            }
            other => panic!("Expected keys, got {other:?}"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["glossa", "-v", "-q", "keys"]).is_err());
    }
}
