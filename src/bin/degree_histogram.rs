//! Prints how many points have each G value for a set of match files.
//! Handy for picking a minimal match before running a selection.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use bankselect::config::DEFAULT_MINIMAL_MATCH;
use bankselect::io_utils::{bank_cli_error, io_cli_error, simple_cli_error};
use bankselect::{expand_match_glob, parse_match_files, DegreeTable};

#[derive(Parser)]
struct Args {
    /// Glob for files that store matches
    glob: String,
    /// Match above which two points count as neighbors
    #[arg(long, default_value_t = DEFAULT_MINIMAL_MATCH)]
    minimal_match: f64,
    /// Rank the bank-keyed map instead of the test-keyed one
    #[arg(long)]
    bank_keyed: bool,
    /// Optional CSV output path for per-point G values
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if !(0.0..=1.0).contains(&args.minimal_match) {
        return Err(simple_cli_error("minimal match must lie in [0, 1]").into());
    }

    let paths = expand_match_glob(&args.glob).map_err(|e| bank_cli_error("expanding glob", e))?;
    let tables = parse_match_files(&paths, false).map_err(|e| bank_cli_error("reading matches", e))?;
    let adjacency = if args.bank_keyed {
        &tables.by_bank
    } else {
        &tables.by_test
    };
    let degrees = DegreeTable::rank(adjacency, args.minimal_match);

    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        let mut wtr = csv::Writer::from_writer(f);
        wtr.write_record(["point", "g_value"])?;
        for d in degrees.iter() {
            let g = d.g_value.to_string();
            wtr.write_record([d.point.as_str(), g.as_str()])?;
        }
        wtr.flush()?;
    }

    println!("#files: {}", paths.len());
    println!("#points: {}", degrees.len());
    for (g, count) in degrees.histogram() {
        println!("G={g}: {count}");
    }
    match degrees.max_degree() {
        Some(max) => println!("max G: {max}"),
        None => println!("max G: none"),
    }
    Ok(())
}
