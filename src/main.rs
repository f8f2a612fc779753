//! AcroForm filling tool - CLI Interface
//!
//! `fill` loads a PDF form, writes text values into named fields and saves a
//! timestamped copy. `list` prints the name and type of every form field.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use formfill::config::{load_field_values, FieldAssignment, FillConfig, LoremRequest};
use formfill::utils::lorem_paragraphs;
use formfill::{list_form_fields, ConsoleSink, Pipeline, Result};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages (default)
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches
        .get_one::<LogLevel>("verbose")
        .copied()
        .unwrap_or(LogLevel::Warn);
    init_logging(log_level);

    let outcome = match matches.subcommand() {
        Some(("fill", sub)) => run_fill(sub).await,
        Some(("list", sub)) => run_list(sub).await,
        _ => unreachable!("subcommand is required"),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        eprintln!("{}", e.diagnostic_trace());
        process::exit(1);
    }
}

fn build_cli() -> Command {
    let input = Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(clap::value_parser!(PathBuf))
        .help("Input PDF form (default: ./form.pdf)");

    Command::new("formfill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fill and inspect AcroForm text fields in PDF documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .value_parser(clap::value_parser!(LogLevel))
                .default_value("warn")
                .help("Set logging verbosity"),
        )
        .subcommand(
            Command::new("fill")
                .about("Fill text fields and save a timestamped copy")
                .arg(input.clone())
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Directory for the output file (default: next to the input)"),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Configuration file (JSON/YAML)"),
                )
                .arg(
                    Arg::new("values")
                        .long("values")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Field values file (JSON/YAML list or map)"),
                )
                .arg(
                    Arg::new("set")
                        .short('s')
                        .long("set")
                        .value_name("NAME=VALUE")
                        .action(ArgAction::Append)
                        .help("Fill field NAME with VALUE (repeatable)"),
                )
                .arg(
                    Arg::new("lorem")
                        .long("lorem")
                        .value_name("NAME=PARAGRAPHS")
                        .action(ArgAction::Append)
                        .help("Fill field NAME with generated placeholder paragraphs (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Print the name and type of every form field")
                .arg(input),
        )
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("formfill={}", filter_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

async fn run_fill(matches: &ArgMatches) -> Result<()> {
    let config = build_fill_config(matches)?;
    let pipeline = Pipeline::new(config, Arc::new(ConsoleSink));
    let report = pipeline.execute().await?;

    println!("Saved {}", report.output_path.display());
    info!(
        "{} filled, {} not found",
        report.filled.len(),
        report.missing.len()
    );
    Ok(())
}

async fn run_list(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| FillConfig::default().input);
    list_form_fields(&input, &ConsoleSink).await
}

/// Config file first, then CLI overrides; field values are appended in the
/// order values file, `--set`, `--lorem`.
fn build_fill_config(matches: &ArgMatches) -> Result<FillConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => FillConfig::from_file(path)?,
        None => FillConfig::default(),
    };

    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input = input.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output-dir") {
        config.output_dir = Some(dir.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("values") {
        config.fields.extend(load_field_values(path)?);
    }
    for arg in matches.get_many::<String>("set").into_iter().flatten() {
        config.fields.push(FieldAssignment::parse(arg)?);
    }

    let mut rng = rand::thread_rng();
    for arg in matches.get_many::<String>("lorem").into_iter().flatten() {
        let request = LoremRequest::parse(arg)?;
        let text = lorem_paragraphs(&mut rng, request.paragraphs);
        config.fields.push(FieldAssignment::new(request.field, text));
    }

    config.validate()?;
    Ok(config)
}
