//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - A populated cell: its coordinate and value
//! - [`CellValue`] - The typed value stored in a cell
//! - [`CellKind`] - The semantic type tag of a value
//! - [`CellAddress`] - A cell's location (e.g., "B3")

mod address;
mod kind;
mod value;

pub use address::CellAddress;
pub use kind::CellKind;
pub use value::{CellError, CellValue};

/// A cell present in a row
///
/// A cell holding [`CellValue::Blank`] is still present: it counts towards
/// [`Row::last_cell_num`](crate::Row::last_cell_num), unlike an absent cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    address: CellAddress,
    value: CellValue,
}

impl Cell {
    /// Create a cell at the given coordinate
    pub fn new(address: CellAddress, value: CellValue) -> Self {
        Self { address, value }
    }

    /// Coordinate of this cell
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// Zero-based row index
    pub fn row_index(&self) -> u32 {
        self.address.row
    }

    /// Zero-based column index
    pub fn column_index(&self) -> u16 {
        self.address.col
    }

    /// The cell's value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Replace the cell's value
    pub fn set_value<V: Into<CellValue>>(&mut self, value: V) {
        self.value = value.into();
    }

    /// Semantic kind of the value
    pub fn kind(&self) -> CellKind {
        CellKind::of(&self.value)
    }

    /// Check if the cell is explicitly blank
    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }
}
