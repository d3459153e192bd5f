//! Convert a whitespace-delimited text file to CSV.
//!
//! Usage:
//!   txt-to-csv --input input.txt --output output.csv

use clap::Parser;
use seed_convert::{convert_file, init_logging};
use std::path::PathBuf;
use std::process;

/// Converts the input text file to a CSV file.
///
/// Each non-blank line becomes one record; fields are the line's
/// whitespace-separated tokens, written unquoted.
#[derive(Parser)]
#[command(
    name = "txt-to-csv",
    after_help = "Example: txt-to-csv --input input.txt --output output.csv"
)]
struct Cli {
    /// Input text file
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file (overwritten)
    #[arg(short, long)]
    output: PathBuf,

    /// Show record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = convert_file(&cli.input, &cli.output) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
