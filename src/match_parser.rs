//! Reading precomputed match files into adjacency maps.
//!
//! Every line of a match file holds `bankTag testTag ... matchValue`, with
//! the match value in the last whitespace-separated field. Each record is
//! stored in both directions in both maps. When the same pair shows up more
//! than once, the first value read is kept.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::adjacency::AdjacencyMap;
use crate::error::BankError;
use crate::types::{MatchValue, Tag};

/// One parsed line of a match file.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEdge {
    pub bank: Tag,
    pub test: Tag,
    pub value: MatchValue,
}

/// Accumulator for the bank-keyed and test-keyed adjacency maps.
///
/// Created once by the caller and fed one file at a time. Call
/// [`MatchTables::finish`] after the last file to drop self-matches.
#[derive(Debug, Clone, Default)]
pub struct MatchTables {
    pub by_bank: AdjacencyMap,
    pub by_test: AdjacencyMap,
    records: usize,
}

impl MatchTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of match records read so far, self-matches included.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn insert(&mut self, edge: &MatchEdge) {
        self.by_bank.record(&edge.bank, &edge.test, edge.value);
        self.by_bank.record(&edge.test, &edge.bank, edge.value);
        self.by_test.record(&edge.test, &edge.bank, edge.value);
        self.by_test.record(&edge.bank, &edge.test, edge.value);
        self.records += 1;
    }

    /// Parse a single match file into this accumulator. Returns the number of
    /// records read from it.
    pub fn parse_file(&mut self, path: &Path) -> Result<usize, BankError> {
        if !path.exists() {
            return Err(BankError::FileNotFound(path.to_path_buf()));
        }
        let reader = BufReader::new(File::open(path)?);
        let mut count = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(edge) = parse_line(&line, path, idx + 1)? {
                self.insert(&edge);
                count += 1;
            }
        }
        debug!("parsed {} match records from {}", count, path.display());
        Ok(count)
    }

    /// Remove self-matches from both maps. Returns how many were removed.
    pub fn finish(&mut self) -> usize {
        self.by_bank.remove_self_matches() + self.by_test.remove_self_matches()
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line: &str, path: &Path, line_no: usize) -> Result<Option<MatchEdge>, BankError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    let malformed = |reason: String| BankError::MalformedMatchRecord {
        path: path.to_path_buf(),
        line: line_no,
        reason,
    };
    if fields.len() < 3 {
        return Err(malformed(format!(
            "expected at least 3 fields, found {}",
            fields.len()
        )));
    }
    let last = fields[fields.len() - 1];
    let value: f64 = last
        .parse()
        .map_err(|_| malformed(format!("match value {last:?} is not a number")))?;
    Ok(Some(MatchEdge {
        bank: Tag::from(fields[0]),
        test: Tag::from(fields[1]),
        value: MatchValue::new(value),
    }))
}

/// Expand a match file glob into a sorted list of paths.
pub fn expand_match_glob(pattern: &str) -> Result<Vec<PathBuf>, BankError> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        paths.push(entry?);
    }
    paths.sort();
    Ok(paths)
}

/// Parse all files in order and remove self-matches.
pub fn parse_match_files(paths: &[PathBuf], show_progress: bool) -> Result<MatchTables, BankError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(paths.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} match files ({eta})")
        {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut tables = MatchTables::new();
    for path in paths {
        tables.parse_file(path)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let self_matches = tables.finish();
    debug!(
        "{} match records from {} files, {} self-matches dropped",
        tables.records(),
        paths.len(),
        self_matches
    );
    Ok(tables)
}
