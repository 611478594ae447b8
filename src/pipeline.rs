//! End-to-end selection run: tables in, new bank and bookkeeping out.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::assembler::{assemble_bank, AssemblyCounts};
use crate::config::SelectionConfig;
use crate::elimination::EliminationRegistry;
use crate::error::BankError;
use crate::match_parser::{expand_match_glob, parse_match_files};
use crate::process::ProcessRecord;
use crate::selector::{GreedySelector, Selection};
use crate::summary::{append_summary, bank_index_from_path, SummaryLine};
use crate::table::RecordTable;

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub selection: Selection,
    pub counts: AssemblyCounts,
    pub bank_index: u64,
    pub match_files: usize,
    pub new_bank_file: PathBuf,
    pub process_file: PathBuf,
}

pub fn run_selection(config: &SelectionConfig) -> Result<RunReport, BankError> {
    let started = Instant::now();
    let mut process = ProcessRecord::start(config);

    let proposal_path = config.proposal_file()?;
    info!("opening proposals file {}", proposal_path.display());
    let proposals = RecordTable::read(proposal_path)?;
    process.add_input(proposal_path)?;

    let old_bank_path = config.old_bank_file()?;
    info!("opening bank file {}", old_bank_path.display());
    let old_bank = RecordTable::read(old_bank_path)?;
    process.add_input(old_bank_path)?;
    let bank_index = bank_index_from_path(old_bank_path)?;

    let new_bank_path = config.new_bank_file()?;
    let pattern = config.match_file_glob()?;

    let match_files = expand_match_glob(pattern)?;
    info!("reading {} match files matching {}", match_files.len(), pattern);
    let tables = parse_match_files(&match_files, config.verbose)?;
    let had_match_data = tables.records() > 0;
    debug!(
        "bank-keyed map: {} points, {} pairs; test-keyed map: {} points, {} pairs",
        tables.by_bank.len(),
        tables.by_bank.edge_count(),
        tables.by_test.len(),
        tables.by_test.edge_count()
    );

    if config.verbose {
        let registry = EliminationRegistry::new(&config.elimination_dir);
        let tags: Vec<_> = proposals.tags().collect();
        let marked = registry.eliminated(&tags);
        debug!(
            "{} of {} proposals carry a marker in {}",
            marked.len(),
            tags.len(),
            registry.dir().display()
        );
    }

    let selection =
        GreedySelector::new(tables.by_test, config.minimal_match, config.tie_break).run();
    info!(
        "{} best testpoints after {} iterations, {} unclustered",
        selection.survivors.len(),
        selection.iterations,
        selection.remaining.len()
    );
    debug!(
        "proposals: {}, points left in match map: {}",
        proposals.len(),
        selection.remaining.len()
    );

    let (new_bank, counts) = assemble_bank(&old_bank, &proposals, &selection, had_match_data)?;
    new_bank.write(new_bank_path)?;
    process.finish();
    let process_file = process.write_beside(new_bank_path)?;
    info!("written results to file {}", new_bank_path.display());
    info!(
        "total {} test points added, {} total now",
        counts.added(),
        counts.total()
    );

    append_summary(
        &config.summary_file,
        &SummaryLine {
            bank_index,
            added: counts.added(),
            total: counts.total(),
        },
    )?;
    debug!("time taken: {:.2?}", started.elapsed());

    Ok(RunReport {
        selection,
        counts,
        bank_index,
        match_files: match_files.len(),
        new_bank_file: new_bank_path.to_path_buf(),
        process_file,
    })
}
