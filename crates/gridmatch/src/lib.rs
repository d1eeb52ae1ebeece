//! # gridmatch
//!
//! Test assertions for spreadsheets: check that a generated sheet or
//! workbook matches an expected one, and get a one-line explanation of the
//! first difference when it does not.
//!
//! ## How sheets are compared
//!
//! - Every row present in the expected sheet is looked up at the same index
//!   in the actual sheet. Rows present only in the actual sheet are ignored.
//! - Two rows must end at the same column, and every expected cell must
//!   match the actual cell at the same column.
//! - An absent cell and an explicitly blank cell are interchangeable.
//! - Cells must hold the same kind of value (numeric, string, boolean,
//!   formula, blank, error) and, for numbers, strings, booleans and
//!   formulas, the same value.
//! - The first difference ends the comparison.
//!
//! ## Example
//!
//! ```rust
//! use gridmatch::prelude::*;
//!
//! let mut expected = Sheet::new("Report");
//! expected.set_cell_value("A1", "Region").unwrap();
//! expected.set_cell_value("B1", 1250.5).unwrap();
//!
//! let actual = expected.clone();
//! assert_that(&actual, &rows_equal(&expected));
//! assert_sheet_eq!(actual, expected);
//! ```

pub mod assert;
pub mod compare;
pub mod discrepancy;
pub mod matcher;
pub mod prelude;

pub use assert::{assert_that, check, AssertionFailure};
pub use compare::{
    compare_cells, compare_rows, compare_sheets, compare_workbooks, equal, Comparison,
};
pub use discrepancy::{Discrepancy, Side};
pub use matcher::{
    rows_equal, same_workbook, Description, Matcher, RowEqualityMatcher, WorkbookMatcher,
};

// Re-export the document model so tests need a single dependency
pub use gridmatch_core::{
    Cell, CellAddress, CellError, CellKind, CellValue, Error, Result, Row, Sheet, Workbook,
};
