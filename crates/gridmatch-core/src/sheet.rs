//! Sheet type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellAddress, CellValue};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::MAX_ROWS;

/// A named sheet of sparse rows
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    name: String,
    rows: BTreeMap<u32, Row>,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name. Sheets inside a workbook are renamed through
    /// [`Workbook::rename_sheet`](crate::Workbook::rename_sheet).
    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Row Access ===

    /// Get a row by index, if present
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get the row at an index, creating an empty one if absent
    pub fn create_row(&mut self, index: u32) -> Result<&mut Row> {
        if index >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(index, MAX_ROWS - 1));
        }
        Ok(self.rows.entry(index).or_insert_with(|| Row::new(index)))
    }

    /// Iterate over present rows in index order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Number of present rows
    pub fn physical_row_count(&self) -> usize {
        self.rows.len()
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "B3")
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.cell(col))
    }

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.create_row(row)?.set_value(col, value)?;
        Ok(())
    }

    /// Set a formula by address string
    pub fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<()> {
        self.set_cell_value(address, CellValue::formula(formula))
    }

    /// Create an explicitly blank cell by address string
    pub fn set_cell_blank(&mut self, address: &str) -> Result<()> {
        self.set_cell_value(address, CellValue::Blank)
    }

    /// Remove a cell, leaving it absent. The row itself stays present.
    pub fn clear_cell_at(&mut self, row: u32, col: u16) -> Option<Cell> {
        self.rows.get_mut(&row).and_then(|r| r.remove_cell(col))
    }

    /// Number of present cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(Row::physical_cell_count).sum()
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get_by_address() {
        let mut sheet = Sheet::new("Data");
        sheet.set_cell_value("B3", "5").unwrap();

        let cell = sheet.cell("B3").unwrap().unwrap();
        assert_eq!(cell.kind(), CellKind::String);
        assert_eq!(cell.row_index(), 2);
        assert_eq!(cell.column_index(), 1);
        assert!(sheet.cell("A1").unwrap().is_none());
        assert!(sheet.cell("not an address").is_err());
    }

    #[test]
    fn test_rows_are_sparse() {
        let mut sheet = Sheet::new("Data");
        sheet.set_cell_value_at(0, 0, 1.0).unwrap();
        sheet.set_cell_value_at(5, 0, 2.0).unwrap();

        assert!(sheet.row(0).is_some());
        assert!(sheet.row(1).is_none());
        assert!(sheet.row(5).is_some());
        assert_eq!(sheet.physical_row_count(), 2);

        let indices: Vec<u32> = sheet.rows().map(Row::index).collect();
        assert_eq!(indices, vec![0, 5]);
    }

    #[test]
    fn test_create_row_without_cells() {
        let mut sheet = Sheet::new("Data");
        let row = sheet.create_row(3).unwrap();
        assert!(row.is_empty());
        assert!(sheet.row(3).is_some());
        assert_eq!(sheet.cell_count(), 0);
        assert!(sheet.create_row(MAX_ROWS).is_err());
    }

    #[test]
    fn test_clear_cell_keeps_row() {
        let mut sheet = Sheet::new("Data");
        sheet.set_cell_formula("A1", "=B1*2").unwrap();
        assert_eq!(
            sheet.cell_at(0, 0).unwrap().value().formula_text(),
            Some("B1*2")
        );

        assert!(sheet.clear_cell_at(0, 0).is_some());
        assert!(sheet.cell_at(0, 0).is_none());
        assert!(sheet.row(0).is_some());
    }
}
