//! CSV options

/// Options for reading CSV fixtures
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Detect numbers, booleans, formulas, errors and blanks (default: true).
    /// When off, every field becomes a string cell.
    pub auto_detect_types: bool,
    /// Name of the resulting sheet (default: "Sheet1")
    pub sheet_name: String,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            auto_detect_types: true,
            sheet_name: "Sheet1".to_string(),
        }
    }
}

impl CsvReadOptions {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the sheet name
    pub fn with_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Keep every field as a string
    pub fn raw_strings(mut self) -> Self {
        self.auto_detect_types = false;
        self
    }
}
