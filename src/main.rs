use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use bankselect::config::{DEFAULT_ELIMINATION_DIR, DEFAULT_MINIMAL_MATCH, DEFAULT_SUMMARY_FILE};
use bankselect::io_utils::bank_cli_error;
use bankselect::{run_selection, SelectionConfig, TieBreak};

/// Read all match files for a testpoint set against itself, keep the point
/// with the most neighbors above the minimal match, drop those neighbors,
/// repeat until no point has such a neighbor, and add the survivors to the
/// old bank.
#[derive(Parser, Debug)]
#[command(name = "bankselect")]
struct Args {
    /// The current points file
    #[arg(long = "proposal-file-name")]
    proposal_file: Option<PathBuf>,
    /// The old bank file
    #[arg(long = "old-bank-file-name")]
    old_bank_file: Option<PathBuf>,
    /// The new bank file
    #[arg(long = "new-bank-file-name")]
    new_bank_file: Option<PathBuf>,
    /// Glob for files that store matches
    #[arg(long = "match-file-name-glob")]
    match_file_glob: Option<String>,
    /// Match above which two points are redundant
    #[arg(long, default_value_t = DEFAULT_MINIMAL_MATCH)]
    minimal_match: f64,
    /// Where markers of eliminated proposals are stored
    #[arg(long, default_value = DEFAULT_ELIMINATION_DIR)]
    elimination_dir: PathBuf,
    /// Append-only statistics file
    #[arg(long, default_value = DEFAULT_SUMMARY_FILE)]
    summary_file: PathBuf,
    /// How to choose between points with equal G values
    #[arg(long, value_enum, default_value_t = TieBreak::LastInserted)]
    tie_break: TieBreak,
    /// Print extra debugging information
    #[arg(short = 'V', long)]
    verbose: bool,
    /// Optional comment stored in the process record
    #[arg(short = 'C', long, default_value = "")]
    comment: String,
}

impl From<Args> for SelectionConfig {
    fn from(args: Args) -> Self {
        SelectionConfig {
            proposal_file: args.proposal_file,
            old_bank_file: args.old_bank_file,
            new_bank_file: args.new_bank_file,
            match_file_glob: args.match_file_glob,
            minimal_match: args.minimal_match,
            elimination_dir: args.elimination_dir,
            summary_file: args.summary_file,
            tie_break: args.tie_break,
            verbose: args.verbose,
            comment: args.comment,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = SelectionConfig::from(args);
    let report = run_selection(&config).map_err(|e| bank_cli_error("bank selection failed", e))?;
    println!(
        "{}\t{}\t{}",
        report.bank_index,
        report.counts.added(),
        report.counts.total()
    );
    Ok(())
}
