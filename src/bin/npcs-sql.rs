//! Generate SQL statements inserting NPCs into the database.
//!
//! Usage:
//!   npcs-sql --npcs npcs.csv --maps maps.csv --output npcs.sql
//!
//! The NPC table header is
//! `UniqId,Name,Type,Look,MapId,X,Y,Base,Sort,Level,Life,Defence,MagicDef`.
//! Rows whose MapId is not in the first column of the map table are
//! written commented out.

use clap::Parser;
use seed_convert::{generate_file, init_logging};
use std::path::PathBuf;
use std::process;

/// Generate SQL statements to insert NPCs into the database.
#[derive(Parser)]
#[command(
    name = "npcs-sql",
    after_help = "Example: npcs-sql --npcs npcs.csv --maps maps.csv --output npcs.sql"
)]
struct Cli {
    /// CSV file with the NPCs
    #[arg(long)]
    npcs: PathBuf,

    /// CSV file with the maps (first column is the map id)
    #[arg(long)]
    maps: PathBuf,

    /// Output file with the SQL statements (overwritten)
    #[arg(short, long)]
    output: PathBuf,

    /// Show statement counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match generate_file(&cli.npcs, &cli.maps, &cli.output) {
        Ok(report) if report.suppressed > 0 => {
            eprintln!(
                "{} of {} statements commented out (unknown map id)",
                report.suppressed,
                report.total()
            );
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
