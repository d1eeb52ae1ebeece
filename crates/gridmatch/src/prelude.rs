//! Prelude module - common imports for gridmatch users
//!
//! ```rust
//! use gridmatch::prelude::*;
//! ```

pub use crate::{
    // Assertions
    assert_sheet_eq,
    assert_that,
    assert_workbook_eq,
    check,
    // Matchers
    rows_equal,
    same_workbook,
    Description,
    Discrepancy,
    Matcher,

    // Document model
    Cell,
    CellAddress,
    CellError,
    CellKind,
    CellValue,
    Row,
    Sheet,
    Workbook,
};
