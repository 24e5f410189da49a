//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Add CloudWatch alarms for DynamoDB tables to a service template.
#[derive(Debug, Parser)]
#[command(name = "dynalarms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Key under `custom` holding the alarm configuration
    /// (defaults to $DYNALARMS_CONFIG_KEY, then "dynamo-alarms").
    #[arg(long, global = true, value_name = "KEY")]
    pub config_key: Option<String>,

    /// Output format for plans, alarms and summaries.
    #[arg(
        long,
        global = true,
        env = "DYNALARMS_FORMAT",
        default_value = "pretty"
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output with colors.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge alarms into the compiled template and write the service document.
    Generate(GenerateArgs),
    /// Show which alarms would be created or updated, without writing anything.
    Plan(ServiceArgs),
    /// Print the synthesized alarm resources.
    Alarms(ServiceArgs),
}

/// Input document selection.
#[derive(Debug, clap::Args)]
pub struct ServiceArgs {
    /// Service document (JSON). Use "-" to read from stdin.
    #[arg(long, short, value_name = "FILE")]
    pub service: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: ServiceArgs,

    /// Where to write the updated document (defaults to stdout).
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "dynalarms",
            "--config-key",
            "table-alarms",
            "generate",
            "--service",
            "service.json",
            "-o",
            "out.json",
        ])
        .unwrap();

        assert_eq!(cli.config_key.as_deref(), Some("table-alarms"));
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.input.service, PathBuf::from("service.json"));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_plan_with_json_format() {
        let args = ["dynalarms", "plan", "-s", "-", "--format", "json"];

        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Plan(ref args) if args.service == Path::new("-")
        ));
    }
}
