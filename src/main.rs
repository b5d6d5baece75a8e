//! Rotulagem Nutricional ANVISA (rotulo)
//!
//! Command-line front end: reads a nutrition record as JSON, prints derived
//! label data as JSON and exports labels as PDF, PNG, JPEG or SVG.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rotulo::build_info::{self, BuildInfo};
use rotulo::config::ExportConfig;
use rotulo::models::{NutritionRecord, TableFormat};
use rotulo::tools::label::{declarations_response, label_summary, table_response, warnings_response};
use rotulo::tools::{export_label, load_record, ExportFormat, ExportOptions};

#[derive(Parser)]
#[command(
    name = "rotulo",
    version,
    about = "ANVISA nutrition facts label calculator",
    long_about = "Computes the nutrition facts table, front-of-pack warnings and mandatory \
                  declarations (RDC 429/2020, IN 75/2020, RDC 727/2022) from per-100 g/ml values, \
                  and exports the label as PDF, PNG, JPEG or SVG."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show the startup banner and debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print a default nutrition record to fill in
    Template,

    /// Print the nutrition facts table rows
    Table(InputArgs),

    /// Print the front-of-pack "ALTO EM" warnings
    Warnings(InputArgs),

    /// Print the allergen, lactose and gluten declarations
    Declarations(InputArgs),

    /// Print everything that goes on the label
    Summary(InputArgs),

    /// Render the label to a file
    Export(ExportArgs),

    /// Print build information
    Info,
}

#[derive(Args)]
struct InputArgs {
    /// Nutrition record JSON file (stdin when omitted or "-")
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format: pdf, png, jpg or svg
    #[arg(long, short = 'f', default_value_t = ExportFormat::Pdf)]
    format: ExportFormat,

    /// Table layout: vertical, horizontal or linear
    #[arg(long, short = 'l', default_value_t = TableFormat::Vertical)]
    layout: TableFormat,

    /// Pixel ratio for images, 1 to 4 (defaults to ROTULO_SCALE)
    #[arg(long, short = 's')]
    scale: Option<u32>,

    /// JPEG quality, 1 to 100 (defaults to ROTULO_JPEG_QUALITY)
    #[arg(long, short = 'q')]
    quality: Option<u8>,

    /// Output file (defaults to a name derived from the product in ROTULO_OUTPUT_DIR)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging goes to stderr so stdout stays valid JSON
    let directive = if cli.verbose { "rotulo=debug" } else { "rotulo=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    if cli.verbose {
        build_info::print_startup_banner();
    }

    match cli.command {
        Command::Template => print_json(&NutritionRecord::default())?,
        Command::Table(args) => print_json(&table_response(&load_record(args.input.as_deref())?))?,
        Command::Warnings(args) => {
            print_json(&warnings_response(&load_record(args.input.as_deref())?))?
        }
        Command::Declarations(args) => {
            print_json(&declarations_response(&load_record(args.input.as_deref())?))?
        }
        Command::Summary(args) => print_json(&label_summary(&load_record(args.input.as_deref())?))?,
        Command::Export(args) => {
            let config = ExportConfig::from_env()?;
            let record = load_record(args.input.input.as_deref())?;

            let options = ExportOptions {
                layout: args.layout,
                scale: args.scale.unwrap_or(config.scale),
                jpeg_quality: args.quality.unwrap_or(config.jpeg_quality),
                output: args.output,
                ..ExportOptions::from_config(&config, args.format)
            };
            print_json(&export_label(&record, &options, &config)?)?;
        }
        Command::Info => print_json(&BuildInfo::current())?,
    }

    Ok(())
}
