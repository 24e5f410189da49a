//! dynalarms CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dynalarms_cli::cli::{Cli, Commands, GenerateArgs, OutputFormat, ServiceArgs};
use dynalarms_cli::document::{read_service, write_document};
use dynalarms_cli::output::colors::{aeprintln, aprintln, p_g, p_y, paint_plan_line};
use dynalarms_cli::output::{format_output, pretty};
use dynalarms_cli::{Config, Result};
use dynalarms_core::{add_alarms, plan_service, synthesize_service};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_key = config.resolve_config_key(cli.config_key.as_deref());

    match cli.command {
        Commands::Generate(args) => generate(&args, &config_key, cli.format, cli.quiet)?,
        Commands::Plan(args) => plan(&args, &config_key, cli.format)?,
        Commands::Alarms(args) => alarms(&args, &config_key, cli.format)?,
    }

    Ok(())
}

fn generate(
    args: &GenerateArgs,
    config_key: &str,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut service = read_service(&args.input.service)?;

    let report = add_alarms(&mut service, config_key)?;

    write_document(&service, args.output.as_deref())?;

    if quiet {
        return Ok(());
    }

    match report {
        None => aeprintln!(
            "{}",
            p_y(&format!(
                "No 'custom.{}' configuration found; document left unchanged.",
                config_key
            ))
        ),
        Some(report) => match format {
            OutputFormat::Json => aeprintln!("{}", format_output(&report, format)),
            OutputFormat::Pretty => aeprintln!("{}", p_g(&pretty::format_report(&report))),
        },
    }

    Ok(())
}

fn missing_config(config_key: &str) -> String {
    p_y(&format!("No 'custom.{}' configuration found.", config_key))
}

fn plan(args: &ServiceArgs, config_key: &str, format: OutputFormat) -> Result<()> {
    let service = read_service(&args.service)?;

    let Some(actions) = plan_service(&service, config_key)? else {
        aprintln!("{}", missing_config(config_key));
        return Ok(());
    };

    match format {
        OutputFormat::Json => aprintln!("{}", format_output(&actions, format)),
        OutputFormat::Pretty => {
            aprintln!("Alarm Plan:");
            for line in pretty::format_plan(&actions) {
                aprintln!("  {}", paint_plan_line(&line));
            }
        }
    }

    Ok(())
}

fn alarms(args: &ServiceArgs, config_key: &str, format: OutputFormat) -> Result<()> {
    let service = read_service(&args.service)?;

    let Some(synthesis) = synthesize_service(&service, config_key)? else {
        aprintln!("{}", missing_config(config_key));
        return Ok(());
    };

    match format {
        OutputFormat::Json => aprintln!("{}", format_output(&synthesis.alarms, format)),
        OutputFormat::Pretty => aprintln!("{}", pretty::format_alarms(&synthesis.alarms)),
    }

    Ok(())
}
