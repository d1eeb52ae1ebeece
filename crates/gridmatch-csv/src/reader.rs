//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gridmatch_core::{CellError, CellValue, Sheet};
use tracing::debug;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV fixture reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading csv fixture");
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a sheet.
    ///
    /// A record starting on line `n` becomes row `n - 1`; every record,
    /// including a header line, is data. Empty lines are skipped and leave
    /// absent rows. Records may have different lengths.
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut sheet = Sheet::new(options.sheet_name.as_str());

        for (record_idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let line = match record.position() {
                Some(pos) => Self::start_line(&data, pos),
                None => record_idx as u64,
            };
            let row_idx = u32::try_from(line).unwrap_or(u32::MAX);
            let row = sheet.create_row(row_idx)?;

            for (col, field) in record.iter().enumerate() {
                let value = if options.auto_detect_types {
                    Self::detect_type(field)
                } else {
                    CellValue::string(field)
                };

                row.set_value(u16::try_from(col).unwrap_or(u16::MAX), value)?;
            }
        }

        debug!(
            sheet = sheet.name(),
            rows = sheet.physical_row_count(),
            cells = sheet.cell_count(),
            "csv fixture loaded"
        );
        Ok(sheet)
    }

    /// Zero-based line a record starts on.
    ///
    /// The reported position is where the reader began scanning, which is
    /// before any empty lines it skipped (and, for CRLF, before the `\n` of
    /// the previous terminator).
    fn start_line(data: &[u8], pos: &csv::Position) -> u64 {
        let start = usize::try_from(pos.byte()).map_or(data.len(), |b| b.min(data.len()));
        let skipped = data[start..]
            .iter()
            .take_while(|b| matches!(b, b'\r' | b'\n'))
            .filter(|b| **b == b'\n')
            .count() as u64;
        pos.line().saturating_sub(1) + skipped
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Blank;
        }

        if trimmed.len() > 1 && trimmed.starts_with('=') {
            return CellValue::formula(trimmed);
        }

        if let Some(error) = CellError::parse(trimmed) {
            return CellValue::Error(error);
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        // f64 parsing also accepts "inf" and "NaN"; those stay text
        if trimmed.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(n) = trimmed.parse::<f64>() {
                return CellValue::Numeric(n);
            }
        }

        CellValue::string(field)
    }
}
