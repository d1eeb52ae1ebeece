//! Workbook type - an ordered set of named sheets

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// Sheet names are unique, compared case-insensitively.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create a new workbook with one empty sheet named "Sheet1"
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new("Sheet1")],
        }
    }

    /// Create an empty workbook with no sheets
    pub fn empty() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index. Use [`Workbook::rename_sheet`] to
    /// change its name.
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by exact name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Iterate over sheets in order
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Sheet names in order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// Add a new empty sheet, returning its index
    pub fn add_sheet(&mut self, name: &str) -> Result<usize> {
        self.add_existing_sheet(Sheet::new(name))
    }

    /// Add a sheet built elsewhere (e.g. loaded from a fixture)
    pub fn add_existing_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        self.validate_sheet_name(sheet.name(), None)?;
        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    /// Rename the sheet at an index, keeping names unique
    pub fn rename_sheet(&mut self, index: usize, name: &str) -> Result<()> {
        if index >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        self.validate_sheet_name(name, Some(index))?;
        self.sheets[index].set_name(name);
        Ok(())
    }

    /// Check a sheet name, ignoring the sheet at `exclude` in the duplicate check
    fn validate_sheet_name(&self, name: &str, exclude: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        let lower = name.to_lowercase();
        let taken = self
            .sheets
            .iter()
            .enumerate()
            .any(|(i, s)| Some(i) != exclude && s.name().to_lowercase() == lower);
        if taken {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.sheet(0).unwrap().name(), "Sheet1");
        assert!(Workbook::empty().is_empty());
    }

    #[test]
    fn test_add_sheets() {
        let mut wb = Workbook::new();
        assert_eq!(wb.add_sheet("Data").unwrap(), 1);
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Data"]);
        assert!(wb.sheet_by_name("Data").is_some());
        assert!(wb.sheet_by_name("Missing").is_none());
    }

    #[test]
    fn test_rename_sheet() {
        let mut wb = Workbook::new();
        wb.add_sheet("Data").unwrap();

        wb.sheet_mut(1).unwrap().set_cell_value("A1", 1.0).unwrap();
        wb.rename_sheet(1, "Totals").unwrap();
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Totals"]);
        assert!(wb.sheet_by_name("Totals").unwrap().cell_at(0, 0).is_some());

        // Changing only the case of its own name is allowed
        wb.rename_sheet(1, "TOTALS").unwrap();
        assert_eq!(wb.sheet(1).unwrap().name(), "TOTALS");

        assert!(matches!(
            wb.rename_sheet(1, "sheet1"),
            Err(Error::DuplicateSheetName(_))
        ));
        assert!(matches!(
            wb.rename_sheet(1, "a/b"),
            Err(Error::InvalidSheetName(_))
        ));
        assert!(matches!(
            wb.rename_sheet(2, "Other"),
            Err(Error::SheetOutOfBounds(2, 2))
        ));
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "TOTALS"]);
    }

    #[test]
    fn test_duplicate_name() {
        let mut wb = Workbook::new();
        assert!(matches!(
            wb.add_sheet("SHEET1"),
            Err(Error::DuplicateSheetName(_))
        ));
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();
        assert!(wb.add_sheet("").is_err());
        assert!(wb.add_sheet("Sheet/1").is_err());
        assert!(wb.add_sheet("Sheet[1]").is_err());
        assert!(wb.add_sheet(&"A".repeat(MAX_SHEET_NAME_LEN + 1)).is_err());
    }
}
