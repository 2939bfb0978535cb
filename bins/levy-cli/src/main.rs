//! levy-cli — Command-line front end for the progressive fee schedule.
//!
//! Parses and clamps raw input, runs the fee engine, and renders the
//! summary, per-tier breakdown, and chart series as text or JSON.

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use levy_calc::{calculate, generate_series};
use levy_core::constants::TIERS;
use levy_core::input::{parse_people, parse_rate};
use serde::Serialize;
use tracing::debug;

use crate::config::{CliConfig, LogFormat, OutputFormat};

/// Progressive tiered fee calculator.
#[derive(Parser)]
#[command(name = "levy-cli")]
#[command(version, about = "Marginal fee schedule over three rate tiers")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct GlobalArgs {
    /// Output format (text or json).
    #[arg(short, long, global = true, default_value = "text")]
    output: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Log output format ("text" or "json").
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

impl GlobalArgs {
    /// Convert CLI flags into a CliConfig.
    fn into_config(self) -> Result<CliConfig> {
        Ok(CliConfig {
            log_level: self.log_level,
            log_format: self.log_format.parse()?,
            output: self.output.parse()?,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the fee and its per-tier breakdown.
    Calc(InputArgs),
    /// Sample the fee curve from 65% to 105%.
    Series(InputArgs),
    /// Show the fixed tier schedule.
    Tiers,
}

#[derive(Args)]
struct InputArgs {
    /// Rate in percent. Clamped to [0, 100]; empty reads as 0.
    #[arg(short, long, default_value = "85", allow_hyphen_values = true)]
    rate: String,

    /// Number of people. Clamped to at least 0; empty reads as 0.
    #[arg(short, long, default_value = "100", allow_hyphen_values = true)]
    people: String,
}

impl InputArgs {
    fn parse_values(&self) -> Result<(f64, f64)> {
        let rate = parse_rate(&self.rate).context("invalid --rate")?;
        let people = parse_people(&self.people).context("invalid --people")?;
        debug!(raw_rate = %self.rate, raw_people = %self.people, rate, people, "input clamped");
        Ok((rate, people))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.global.clone().into_config()?;

    init_logging(&config.log_level, config.log_format);
    debug!(?config, "levy-cli v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Calc(args) => run_calc(&args, config.output),
        Commands::Series(args) => run_series(&args, config.output),
        Commands::Tiers => run_tiers(config.output),
    }
}

fn run_calc(args: &InputArgs, output: OutputFormat) -> Result<()> {
    let (rate, people) = args.parse_values()?;
    let result = calculate(rate, people);

    match output {
        OutputFormat::Text => print!("{}", render::render_calculation(&result, rate, people)),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

fn run_series(args: &InputArgs, output: OutputFormat) -> Result<()> {
    let (rate, people) = args.parse_values()?;
    let series = generate_series(people, rate);

    match output {
        OutputFormat::Text => print!("{}", render::render_series(&series)),
        OutputFormat::Json => print_json(&series)?,
    }
    Ok(())
}

fn run_tiers(output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => print!("{}", render::render_tiers()),
        OutputFormat::Json => print_json(&TIERS)?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so JSON written to stdout stays parseable.
fn init_logging(level_str: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
