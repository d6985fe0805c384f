//! Command-line front end: identifies the rhyme-scheme form of sonnet files.
//!
//! Usage:
//!   sonnet-form <SONNET>... [--dictionary <PATH>] [--config <PATH>] [--scheme] [--format json]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use sonnet_form::config::{self, Config, DictionaryMode};
use sonnet_form::report_io::save_reports;
use sonnet_form::{identify_sonnet, PhonemeDictionary, PhonemeSource, ScanningDictionary, SonnetReport};

const DEFAULT_CONFIG_FILE: &str = "sonnet-form.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "sonnet-form")]
#[command(version, about = "Identify whether a sonnet is Shakespearean, Petrarchan or Spenserian")]
struct Args {
    /// Sonnet text files, one verse line per line
    #[arg(required = true)]
    sonnets: Vec<PathBuf>,

    /// Phoneme dictionary (`WORD P1 P2 ...` per line)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// TOML configuration file (defaults to ./sonnet-form.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Re-read the dictionary for every word instead of indexing it once
    #[arg(long)]
    scan: bool,

    /// Let blank lines pass without a rhyme letter
    #[arg(long)]
    skip_blank_lines: bool,

    /// Print the derived rhyme scheme next to the form
    #[arg(long)]
    scheme: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the reports to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug logging on stderr (takes precedence over RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// `--verbose` wins over `RUST_LOG`; without it `RUST_LOG` applies, falling
/// back to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line flags override the config file; the dictionary path is
/// validated only after they are applied.
fn resolve_config(args: &Args) -> Result<Config> {
    let config_file = match &args.config {
        Some(path) => Some(path.as_path()),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Some(Path::new(DEFAULT_CONFIG_FILE)),
        None => None,
    };
    let mut config = match config_file {
        Some(path) => parse_config(path)?,
        None => Config::default(),
    };

    if let Some(dictionary) = &args.dictionary {
        config.dictionary_path = dictionary.clone();
    }
    if args.scan {
        config.dictionary_mode = DictionaryMode::Scanning;
    }
    if args.skip_blank_lines {
        config.skip_blank_lines = true;
    }

    if let Some(path) = config_file {
        let origin = if args.dictionary.is_some() {
            "--dictionary".to_string()
        } else {
            path.display().to_string()
        };
        config.validate(&origin).map_err(|e| anyhow!(e))?;
    }
    Ok(config)
}

fn parse_config(path: &Path) -> Result<Config> {
    let path_str = path
        .to_str()
        .ok_or_else(|| anyhow!("config path {:?} is not valid UTF-8", path))?;
    config::parse_config_file(path_str).map_err(|e| anyhow!(e))
}

fn open_dictionary(config: &Config) -> Result<Box<dyn PhonemeSource>> {
    let source: Box<dyn PhonemeSource> = match config.dictionary_mode {
        DictionaryMode::Indexed => Box::new(
            PhonemeDictionary::load(&config.dictionary_path).context("loading phoneme dictionary")?,
        ),
        DictionaryMode::Scanning => Box::new(ScanningDictionary::new(&config.dictionary_path)),
    };
    Ok(source)
}

/// Analyses every sonnet. Returns `Ok(false)` when at least one failed.
fn run(args: &Args) -> Result<bool> {
    let config = resolve_config(args)?;
    let source = open_dictionary(&config)?;
    let options = config.scheme_options();

    let mut reports: Vec<SonnetReport> = Vec::with_capacity(args.sonnets.len());
    let mut all_ok = true;
    for path in &args.sonnets {
        match identify_sonnet(path, source.as_ref(), options) {
            Ok(report) => {
                if args.format == OutputFormat::Text {
                    print_text(&report, args.scheme);
                }
                reports.push(report);
            }
            Err(e) => {
                eprintln!("{}: error: {}", path.display(), e);
                all_ok = false;
            }
        }
    }

    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&reports).context("serializing reports")?;
        println!("{}", json);
    }
    if let Some(output) = &args.output {
        save_reports(&reports, output).map_err(|e| anyhow!("{}", e))?;
    }
    Ok(all_ok)
}

fn print_text(report: &SonnetReport, with_scheme: bool) {
    if with_scheme {
        println!("{}: {} ({})", report.source.display(), report.form, report.scheme);
    } else {
        println!("{}: {}", report.source.display(), report.form);
    }
}
