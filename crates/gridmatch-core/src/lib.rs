//! # gridmatch-core
//!
//! The document model that gridmatch compares.
//!
//! This crate provides:
//! - [`Workbook`] and [`Sheet`] - named sheets holding sparse rows
//! - [`Row`] and [`Cell`] - sparse cells addressed by zero-based indices
//! - [`CellValue`] and [`CellKind`] - typed cell values and their semantic kind
//! - [`CellAddress`] - A1-style coordinates used in mismatch messages
//!
//! ## Example
//!
//! ```rust
//! use gridmatch_core::{CellKind, Sheet};
//!
//! let mut sheet = Sheet::new("Data");
//! sheet.set_cell_value("A1", "Total").unwrap();
//! sheet.set_cell_value("B1", 42.0).unwrap();
//! sheet.set_cell_formula("C1", "SUM(B1:B1)").unwrap();
//!
//! let row = sheet.row(0).unwrap();
//! assert_eq!(row.last_cell_num(), 3);
//! assert_eq!(row.cell(1).unwrap().kind(), CellKind::Numeric);
//! ```

pub mod cell;
pub mod error;
pub mod row;
pub mod sheet;
pub mod workbook;

pub use cell::{Cell, CellAddress, CellError, CellKind, CellValue};
pub use error::{Error, Result};
pub use row::Row;
pub use sheet::Sheet;
pub use workbook::Workbook;

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
