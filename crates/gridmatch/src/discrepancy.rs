//! Discrepancies reported by a failed comparison

use std::fmt;

use gridmatch_core::{CellAddress, CellKind};
use thiserror::Error;

/// Which document a row or cell is missing from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Expected,
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Expected => f.write_str("expected"),
            Side::Actual => f.write_str("actual"),
        }
    }
}

/// The first difference found between an expected and an actual document.
///
/// Row numbers in messages are one-based, as a spreadsheet shows them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Discrepancy {
    /// One side has a row the other lacks
    #[error("One of rows was null: row {number} is missing from {missing_from}", number = .row + 1)]
    RowMissing { row: u32, missing_from: Side },

    /// Rows end at a different column
    #[error(
        "Different number of cells: expected: '{expected}' actual '{actual}' in row {number}",
        number = .row + 1
    )]
    CellCountMismatch { row: u32, expected: u32, actual: u32 },

    /// One side has a non-blank cell the other lacks
    #[error("One of cells was null: {address} is missing from {missing_from}")]
    CellMissing {
        address: CellAddress,
        missing_from: Side,
    },

    /// Both cells exist but hold different kinds of value
    #[error("Cell at {address} has different types: expected: '{expected}' actual '{actual}'")]
    TypeMismatch {
        address: CellAddress,
        expected: CellKind,
        actual: CellKind,
    },

    /// Both cells hold the same kind of value but the values differ
    #[error("Cell at {address} has different {kind} values: expected: '{expected}' actual '{actual}'")]
    ValueMismatch {
        address: CellAddress,
        kind: CellKind,
        expected: String,
        actual: String,
    },

    /// Workbooks hold a different number of sheets
    #[error("Different number of sheets: expected: '{expected}' actual '{actual}'")]
    SheetCountMismatch { expected: usize, actual: usize },

    /// An expected sheet has no same-named counterpart
    #[error("Sheet '{name}' was not found in actual workbook")]
    SheetMissing { name: String },

    /// A discrepancy found inside a named sheet of a workbook
    #[error("In sheet '{sheet}': {discrepancy}")]
    InSheet {
        sheet: String,
        discrepancy: Box<Discrepancy>,
    },
}

impl Discrepancy {
    /// Coordinate of the offending cell, when the discrepancy is cell-level
    pub fn address(&self) -> Option<CellAddress> {
        match self {
            Discrepancy::CellMissing { address, .. }
            | Discrepancy::TypeMismatch { address, .. }
            | Discrepancy::ValueMismatch { address, .. } => Some(*address),
            Discrepancy::InSheet { discrepancy, .. } => discrepancy.address(),
            _ => None,
        }
    }

    /// Attach the name of the sheet this discrepancy was found in
    pub fn in_sheet<S: Into<String>>(self, sheet: S) -> Self {
        Discrepancy::InSheet {
            sheet: sheet.into(),
            discrepancy: Box::new(self),
        }
    }
}
