//! Process metadata written next to each new bank.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::SelectionConfig;
use crate::error::BankError;

#[derive(Debug, Clone, Serialize)]
pub struct InputDigest {
    pub path: PathBuf,
    /// Hex SHA-256 of the file contents.
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessRecord {
    pub program: String,
    pub version: String,
    pub pid: u32,
    pub comment: String,
    pub start_time: u64,
    pub end_time: Option<u64>,
    pub options: SelectionConfig,
    pub inputs: Vec<InputDigest>,
}

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl ProcessRecord {
    /// Start a record for this process; `start_time` is taken now.
    pub fn start(config: &SelectionConfig) -> Self {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        Self {
            program,
            version: env!("CARGO_PKG_VERSION").to_string(),
            pid: std::process::id(),
            comment: config.comment.clone(),
            start_time: unix_now(),
            end_time: None,
            options: config.clone(),
            inputs: Vec::new(),
        }
    }

    pub fn add_input(&mut self, path: &Path) -> Result<(), BankError> {
        let data = fs::read(path)?;
        self.inputs.push(InputDigest {
            path: path.to_path_buf(),
            sha256: hex::encode(Sha256::digest(&data)),
        });
        Ok(())
    }

    pub fn finish(&mut self) {
        self.end_time = Some(unix_now());
    }

    /// Write the record as pretty JSON to `<bank>.process.json`.
    pub fn write_beside(&self, bank: &Path) -> Result<PathBuf, BankError> {
        let path = sidecar_path(bank);
        let mut f = fs::File::create(&path)?;
        serde_json::to_writer_pretty(&mut f, self)?;
        f.write_all(b"\n")?;
        Ok(path)
    }
}

pub fn sidecar_path(bank: &Path) -> PathBuf {
    let mut name = bank.as_os_str().to_os_string();
    name.push(".process.json");
    PathBuf::from(name)
}
