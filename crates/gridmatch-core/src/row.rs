//! Row type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellAddress, CellValue};
use crate::error::{Error, Result};
use crate::MAX_COLS;

/// A row of sparse cells
///
/// Cells are keyed by zero-based column index and iterate in column order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    index: u32,
    cells: BTreeMap<u16, Cell>,
}

impl Row {
    /// Create an empty row at the given index
    pub fn new(index: u32) -> Self {
        Self {
            index,
            cells: BTreeMap::new(),
        }
    }

    /// Zero-based row index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the cell at a column, if present
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells.get(&col)
    }

    /// Iterate over present cells in column order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Set the value at a column, creating the cell if needed
    pub fn set_value<V: Into<CellValue>>(&mut self, col: u16, value: V) -> Result<&mut Cell> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }

        let index = self.index;
        let cell = self
            .cells
            .entry(col)
            .or_insert_with(|| Cell::new(CellAddress::new(index, col), CellValue::Blank));
        cell.set_value(value);
        Ok(cell)
    }

    /// Remove the cell at a column, leaving it absent
    pub fn remove_cell(&mut self, col: u16) -> Option<Cell> {
        self.cells.remove(&col)
    }

    /// One past the highest populated column index, or 0 for a row without cells
    ///
    /// Blank cells count as populated.
    pub fn last_cell_num(&self) -> u32 {
        self.cells
            .keys()
            .next_back()
            .map_or(0, |col| *col as u32 + 1)
    }

    /// Number of present cells (blank cells included)
    pub fn physical_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellKind;

    #[test]
    fn test_last_cell_num() {
        let mut row = Row::new(0);
        assert_eq!(row.last_cell_num(), 0);

        row.set_value(0, 1.0).unwrap();
        assert_eq!(row.last_cell_num(), 1);

        row.set_value(3, "x").unwrap();
        assert_eq!(row.last_cell_num(), 4);
        assert_eq!(row.physical_cell_count(), 2);
    }

    #[test]
    fn test_blank_cells_are_populated() {
        let mut row = Row::new(4);
        row.set_value(2, CellValue::Blank).unwrap();

        assert_eq!(row.last_cell_num(), 3);
        let cell = row.cell(2).unwrap();
        assert!(cell.is_blank());
        assert_eq!(cell.kind(), CellKind::Blank);
        assert_eq!(cell.address(), CellAddress::new(4, 2));
    }

    #[test]
    fn test_set_value_overwrites() {
        let mut row = Row::new(0);
        row.set_value(1, "5").unwrap();
        row.set_value(1, 5.0).unwrap();

        assert_eq!(row.physical_cell_count(), 1);
        assert_eq!(row.cell(1).unwrap().value(), &CellValue::Numeric(5.0));
    }

    #[test]
    fn test_cells_iterate_in_column_order() {
        let mut row = Row::new(0);
        row.set_value(5, 1.0).unwrap();
        row.set_value(0, 2.0).unwrap();
        row.set_value(2, 3.0).unwrap();

        let cols: Vec<u16> = row.cells().map(|c| c.column_index()).collect();
        assert_eq!(cols, vec![0, 2, 5]);
    }

    #[test]
    fn test_remove_cell() {
        let mut row = Row::new(0);
        row.set_value(3, 1.0).unwrap();
        assert!(row.remove_cell(3).is_some());
        assert!(row.is_empty());
        assert_eq!(row.last_cell_num(), 0);
    }

    #[test]
    fn test_column_out_of_bounds() {
        let mut row = Row::new(0);
        assert!(row.set_value(MAX_COLS, 1.0).is_err());
    }
}
