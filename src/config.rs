use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BankError;
use crate::selector::TieBreak;

/// Default minimal match above which two points are considered redundant.
pub const DEFAULT_MINIMAL_MATCH: f64 = 0.97;
/// Default directory holding marker files for eliminated proposals.
pub const DEFAULT_ELIMINATION_DIR: &str = "testpoints_eliminated/";
/// Default append-only statistics file.
pub const DEFAULT_SUMMARY_FILE: &str = "SummaryStatistics.dat";

/// Options for a single selection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Current proposal points table.
    pub proposal_file: Option<PathBuf>,
    /// Bank the survivors are appended to.
    pub old_bank_file: Option<PathBuf>,
    /// Output bank table.
    pub new_bank_file: Option<PathBuf>,
    /// Glob for the files holding precomputed matches.
    pub match_file_glob: Option<String>,
    pub minimal_match: f64,
    pub elimination_dir: PathBuf,
    pub summary_file: PathBuf,
    pub tie_break: TieBreak,
    pub verbose: bool,
    /// Free text stored with the process record.
    pub comment: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            proposal_file: None,
            old_bank_file: None,
            new_bank_file: None,
            match_file_glob: None,
            minimal_match: DEFAULT_MINIMAL_MATCH,
            elimination_dir: PathBuf::from(DEFAULT_ELIMINATION_DIR),
            summary_file: PathBuf::from(DEFAULT_SUMMARY_FILE),
            tie_break: TieBreak::default(),
            verbose: false,
            comment: String::new(),
        }
    }
}

impl SelectionConfig {
    pub fn proposal_file(&self) -> Result<&Path, BankError> {
        self.proposal_file
            .as_deref()
            .ok_or(BankError::MissingInput("proposal points file-name"))
    }

    pub fn old_bank_file(&self) -> Result<&Path, BankError> {
        self.old_bank_file
            .as_deref()
            .ok_or(BankError::MissingInput("old bank file-name"))
    }

    pub fn new_bank_file(&self) -> Result<&Path, BankError> {
        self.new_bank_file
            .as_deref()
            .ok_or(BankError::MissingInput("new bank file-name"))
    }

    pub fn match_file_glob(&self) -> Result<&str, BankError> {
        self.match_file_glob
            .as_deref()
            .ok_or(BankError::MissingInput("match file glob"))
    }
}
