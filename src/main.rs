use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

use ghin_stats::input::{self, InputError};
use ghin_stats::output;
use ghin_stats::profile;
use ghin_stats::scoring;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NOT_FOUND: i32 = 1;
const EXIT_BAD_INPUT: i32 = 2;
const EXIT_DATA_FORMAT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "ghin-stats")]
#[command(about = "Analyze golf statistics from a collected GHIN data file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the GHIN data JSON file
    json_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let raw = match input::read_input(&cli.json_file) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {e}");
            let code = match e {
                InputError::NotFound(_) => EXIT_NOT_FOUND,
                InputError::Io { .. } | InputError::Json { .. } => EXIT_BAD_INPUT,
            };
            process::exit(code);
        }
    };

    let golf_profile = match profile::load_profile(&raw) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_DATA_FORMAT);
        }
    };

    let report = scoring::compute_report(&golf_profile);

    match cli.format {
        OutputFormat::Text => {
            let use_colors = output::should_use_colors();
            println!("{}", output::render_text(&report, use_colors));
        }
        OutputFormat::Json => match output::render_json(&report) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(EXIT_DATA_FORMAT);
            }
        },
    }

    process::exit(EXIT_SUCCESS);
}
