//! Timetable - extract a weekly school timetable from a lesson grid

mod error;
mod output;
mod settings;

use anyhow::Context;
use output::OutputFormat;
use std::env;
use std::path::PathBuf;
use timetable_core::storage::{
    render_json, render_markdown, write_csv_content, write_json, write_markdown,
};
use timetable_core::TimetableSheet;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn print_usage() {
    eprintln!("Usage: timetable [OPTIONS] <FILE>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <FILE>                    Timetable sheet to read (.csv)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>       Load sheet layout from a TOML file");
    eprintln!("  -o, --output <FILE>       Write the timetable to a file instead of stdout");
    eprintln!("  -f, --format <FORMAT>     Output format: md (default), json, csv");
    eprintln!("  -v, --verbose             Increase log verbosity (repeatable)");
    eprintln!("  -h, --help                Print help");
}

struct Options {
    input: PathBuf,
    config_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    format: OutputFormat,
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_level),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut format = OutputFormat::default();
    let mut verbosity: u8 = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            "-f" | "--format" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --format requires a value");
                    std::process::exit(1);
                }
                format = match args[i].parse() {
                    Ok(format) => format,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                };
            }
            "-v" | "--verbose" => verbosity = verbosity.saturating_add(1),
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if input.is_none() {
                    input = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        eprintln!("Error: missing timetable file");
        print_usage();
        std::process::exit(1);
    };

    init_logging(verbosity);

    let options = Options {
        input,
        config_file,
        output_file,
        format,
    };
    if let Err(e) = run(&options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    let (config, source) = settings::load_config(options.config_file.as_deref())
        .context("failed to load schedule settings")?;
    match source {
        Some(path) => info!(path = %path.display(), ?config, "loaded settings"),
        None => info!(?config, "using built-in settings"),
    }

    let mut sheet = TimetableSheet::new();
    sheet
        .load_file(&options.input)
        .with_context(|| format!("failed to read {}", options.input.display()))?;

    let schedule = sheet
        .extract(config)
        .with_context(|| format!("failed to extract timetable from {}", options.input.display()))?;
    info!(classes = schedule.len(), format = %options.format, "extracted timetable");

    match (&options.output_file, options.format) {
        (Some(path), OutputFormat::Markdown) => write_markdown(path, &schedule)?,
        (Some(path), OutputFormat::Json) => write_json(path, &schedule)?,
        (Some(path), OutputFormat::Csv) => {
            sheet.write_schedule(&schedule);
            sheet.save_as(path)?;
        }
        (None, OutputFormat::Markdown) => print!("{}", render_markdown(&schedule)),
        (None, OutputFormat::Json) => println!("{}", render_json(&schedule)?),
        (None, OutputFormat::Csv) => {
            sheet.write_schedule(&schedule);
            print!("{}", write_csv_content(&sheet.grid));
        }
    }

    if let Some(path) = &options.output_file {
        eprintln!("Timetable written to {}", path.display());
    }
    Ok(())
}
