//! Append-only statistics file, one line per bank generation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::BankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLine {
    pub bank_index: u64,
    pub added: usize,
    pub total: usize,
}

/// Bank index encoded in a bank file name: the last `_`-separated part of
/// the name before its first `.`, e.g. `banks/bank_12.csv` gives 12.
pub fn bank_index_from_path(path: &Path) -> Result<u64, BankError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BankError::BankIndex(path.display().to_string()))?;
    let stem = name.split('.').next().unwrap_or_default();
    let index = stem.rsplit('_').next().unwrap_or_default();
    index
        .parse()
        .map_err(|_| BankError::BankIndex(path.display().to_string()))
}

/// Append `line` as `index\tadded\ttotal`.
pub fn append_summary(path: &Path, line: &SummaryLine) -> Result<(), BankError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}\t{}\t{}", line.bank_index, line.added, line.total)?;
    file.flush()?;
    Ok(())
}
