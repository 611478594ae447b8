//! Record tables for proposals and banks.
//!
//! A table is a CSV file with a header row. Rows are opaque apart from the
//! `simulation_id` column, which carries the point's tag. Rows are never
//! modified; they are only reordered and projected onto another table's
//! columns.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::BankError;
use crate::types::Tag;

/// Column holding each row's tag.
pub const TAG_COLUMN: &str = "simulation_id";

#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    columns: StringRecord,
    rows: Vec<StringRecord>,
    tag_index: usize,
    origin: PathBuf,
}

impl RecordTable {
    /// Create an empty table with the given columns.
    pub fn new(columns: StringRecord) -> Result<Self, String> {
        let tag_index = columns
            .iter()
            .position(|c| c == TAG_COLUMN)
            .ok_or_else(|| format!("no {TAG_COLUMN} column"))?;
        Ok(Self {
            columns,
            rows: Vec::new(),
            tag_index,
            origin: PathBuf::new(),
        })
    }

    /// Load a table, failing when the file is missing or is not a single
    /// record table with a tag column.
    pub fn read(path: &Path) -> Result<Self, BankError> {
        if !path.exists() {
            return Err(BankError::FileNotFound(path.to_path_buf()));
        }
        let unsupported = |reason: String| BankError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_path(path)?;
        let columns = reader.headers()?.clone();
        if columns.is_empty() {
            return Err(unsupported("missing header row".to_string()));
        }
        let mut table = Self::new(columns).map_err(unsupported)?;
        table.origin = path.to_path_buf();
        for row in reader.records() {
            let row = row.map_err(|e| {
                if matches!(e.kind(), csv::ErrorKind::UnequalLengths { .. }) {
                    unsupported(e.to_string())
                } else {
                    BankError::Csv(e)
                }
            })?;
            table.rows.push(row);
        }
        Ok(table)
    }

    pub fn write(&self, path: &Path) -> Result<(), BankError> {
        let mut writer = WriterBuilder::new().from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// File the table was read from, empty for tables built in memory.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn columns(&self) -> &StringRecord {
        &self.columns
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tag_of(&self, row: &StringRecord) -> Tag {
        Tag::from(row.get(self.tag_index).unwrap_or_default())
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.rows.iter().map(move |r| self.tag_of(r))
    }

    /// Append a row that already has this table's width.
    pub fn push(&mut self, row: StringRecord) {
        self.rows.push(row);
    }

    /// Map of tag to row index. A repeated tag resolves to its last row.
    pub fn index_by_tag(&self) -> HashMap<Tag, usize> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (self.tag_of(r), i))
            .collect()
    }

    /// Column positions in `self` for each of `target`'s columns, or the
    /// name of the first column `self` lacks.
    pub fn projection_onto(&self, target: &StringRecord) -> Result<Vec<usize>, String> {
        target
            .iter()
            .map(|name| {
                self.columns
                    .iter()
                    .position(|c| c == name)
                    .ok_or_else(|| name.to_string())
            })
            .collect()
    }
}

/// Reorder `row`'s fields according to `projection`.
pub fn project(row: &StringRecord, projection: &[usize]) -> StringRecord {
    projection
        .iter()
        .map(|&i| row.get(i).unwrap_or_default())
        .collect()
}
