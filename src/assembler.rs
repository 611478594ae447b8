//! Building the new bank from the old bank and the selection result.

use tracing::debug;

use crate::error::BankError;
use crate::selector::Selection;
use crate::table::{project, RecordTable};
use crate::types::Tag;

/// Where each output row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyCounts {
    pub old_bank: usize,
    pub survivors: usize,
    pub unclustered: usize,
}

impl AssemblyCounts {
    /// Rows added on top of the old bank.
    pub fn added(&self) -> usize {
        self.survivors + self.unclustered
    }

    pub fn total(&self) -> usize {
        self.old_bank + self.added()
    }
}

/// Concatenate old bank rows, survivor rows and unclustered rows.
///
/// The output uses the old bank's columns. If the selection never saw any
/// match data, every proposal passes through in proposal order instead of
/// the (empty) remaining set.
pub fn assemble_bank(
    old_bank: &RecordTable,
    proposals: &RecordTable,
    selection: &Selection,
    had_match_data: bool,
) -> Result<(RecordTable, AssemblyCounts), BankError> {
    let projection = proposals
        .projection_onto(old_bank.columns())
        .map_err(|column| BankError::UnsupportedFormat {
            path: proposals.origin().to_path_buf(),
            reason: format!("missing bank column {column}"),
        })?;
    let lookup = proposals.index_by_tag();

    let mut out = old_bank.clone();
    let mut counts = AssemblyCounts {
        old_bank: old_bank.len(),
        ..AssemblyCounts::default()
    };

    let append = |tag: &Tag, out: &mut RecordTable| -> Result<(), BankError> {
        let row = lookup
            .get(tag)
            .map(|&i| &proposals.rows()[i])
            .ok_or_else(|| BankError::InconsistentReference(tag.clone()))?;
        out.push(project(row, &projection));
        Ok(())
    };

    for tag in &selection.survivors {
        append(tag, &mut out)?;
        counts.survivors += 1;
    }

    if had_match_data {
        for tag in &selection.remaining {
            append(tag, &mut out)?;
            counts.unclustered += 1;
        }
    } else {
        debug!("no match data, passing all {} proposals through", proposals.len());
        for tag in proposals.tags() {
            append(&tag, &mut out)?;
            counts.unclustered += 1;
        }
    }

    debug!(
        "assembled {} rows: {} old bank, {} survivors, {} unclustered",
        counts.total(),
        counts.old_bank,
        counts.survivors,
        counts.unclustered
    );
    Ok((out, counts))
}
