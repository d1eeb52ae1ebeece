//! gridmatch CLI - compare spreadsheet fixtures from the command line

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use gridmatch::{compare_sheets, Sheet};
use gridmatch_csv::{CsvReadOptions, CsvReader};
use tracing::info;

#[derive(Parser)]
#[command(name = "gridmatch")]
#[command(author, version, about = "Compare an expected sheet with an actual one")]
struct Cli {
    /// Log comparison progress (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two CSV sheets; exits with 1 on the first difference and 2
    /// when a file cannot be read
    Compare {
        /// CSV file holding the expected sheet
        expected: PathBuf,

        /// CSV file holding the actual sheet
        actual: PathBuf,

        #[command(flatten)]
        csv: CsvArgs,
    },

    /// Print every cell of a CSV sheet with its kind
    Show {
        /// CSV file to inspect
        input: PathBuf,

        #[command(flatten)]
        csv: CsvArgs,
    },
}

#[derive(Args)]
struct CsvArgs {
    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Keep every field as text instead of detecting numbers, booleans and formulas
    #[arg(long)]
    raw_strings: bool,
}

impl CsvArgs {
    fn options(&self) -> Result<CsvReadOptions> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character");
        }
        let mut options = CsvReadOptions::default().with_delimiter(self.delimiter as u8);
        options.auto_detect_types = !self.raw_strings;
        Ok(options)
    }
}

/// Exit code for a fixture that could not be loaded
const LOAD_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(LOAD_FAILURE)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Compare {
            expected,
            actual,
            csv,
        } => compare(&expected, &actual, &csv.options()?),
        Commands::Show { input, csv } => show(&input, &csv.options()?),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path, options: &CsvReadOptions) -> Result<Sheet> {
    CsvReader::read_file(path, options)
        .with_context(|| format!("Failed to read '{}'", path.display()))
}

fn compare(expected: &Path, actual: &Path, options: &CsvReadOptions) -> Result<ExitCode> {
    let expected_sheet = load(expected, options)?;
    let actual_sheet = load(actual, options)?;
    info!(
        expected = %expected.display(),
        actual = %actual.display(),
        "comparing sheets"
    );

    match compare_sheets(&expected_sheet, &actual_sheet) {
        Ok(()) => {
            println!("OK");
            Ok(ExitCode::SUCCESS)
        }
        Err(discrepancy) => {
            println!("{}", discrepancy);
            Ok(ExitCode::from(1))
        }
    }
}

fn show(input: &Path, options: &CsvReadOptions) -> Result<ExitCode> {
    let sheet = load(input, options)?;

    for row in sheet.rows() {
        let cells: Vec<String> = row
            .cells()
            .map(|cell| format!("{}={}:{}", cell.address(), cell.kind(), cell.value()))
            .collect();
        println!(
            "row {} (last cell {}): {}",
            row.index() + 1,
            row.last_cell_num(),
            cells.join(" ")
        );
    }

    Ok(ExitCode::SUCCESS)
}
