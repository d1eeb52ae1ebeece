//! Row and cell comparison
//!
//! Comparison is driven by the expected document: only rows and cells
//! present in `expected` are visited, so content that exists only in
//! `actual` beyond the expected bounds is never inspected. The walk stops
//! at the first [`Discrepancy`].

use gridmatch_core::{Cell, Row, Sheet, Workbook};
use tracing::{debug, trace};

use crate::discrepancy::{Discrepancy, Side};

/// Result of a comparison: `Ok(())` when equal, otherwise the first discrepancy
pub type Comparison = std::result::Result<(), Discrepancy>;

/// Compare two sheets row by row.
///
/// # Example
/// ```
/// use gridmatch::compare_sheets;
/// use gridmatch_core::Sheet;
///
/// let mut expected = Sheet::new("Data");
/// expected.set_cell_value("A1", 3.14).unwrap();
/// let mut actual = Sheet::new("Data");
/// actual.set_cell_value("A1", 3.15).unwrap();
///
/// let err = compare_sheets(&expected, &actual).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Cell at A1 has different NUMERIC values: expected: '3.14' actual '3.15'"
/// );
/// ```
pub fn compare_sheets(expected: &Sheet, actual: &Sheet) -> Comparison {
    for row in expected.rows() {
        trace!(sheet = expected.name(), row = row.index(), "comparing row");
        if let Err(discrepancy) = compare_rows(Some(row), actual.row(row.index())) {
            debug!(sheet = expected.name(), %discrepancy, "sheets differ");
            return Err(discrepancy);
        }
    }
    Ok(())
}

/// Boolean form of [`compare_sheets`] carrying the mismatch description.
pub fn equal(expected: &Sheet, actual: &Sheet) -> (bool, Option<String>) {
    match compare_sheets(expected, actual) {
        Ok(()) => (true, None),
        Err(discrepancy) => (false, Some(discrepancy.to_string())),
    }
}

/// Compare two optional rows.
///
/// Two absent rows are equal. Otherwise both must be present, end at the
/// same column, and agree on every cell present in the expected row.
pub fn compare_rows(expected: Option<&Row>, actual: Option<&Row>) -> Comparison {
    let (expected, actual) = match (expected, actual) {
        (None, None) => return Ok(()),
        (Some(e), None) => {
            return Err(Discrepancy::RowMissing {
                row: e.index(),
                missing_from: Side::Actual,
            })
        }
        (None, Some(a)) => {
            return Err(Discrepancy::RowMissing {
                row: a.index(),
                missing_from: Side::Expected,
            })
        }
        (Some(e), Some(a)) => (e, a),
    };

    if expected.last_cell_num() != actual.last_cell_num() {
        return Err(Discrepancy::CellCountMismatch {
            row: expected.index(),
            expected: expected.last_cell_num(),
            actual: actual.last_cell_num(),
        });
    }

    for cell in expected.cells() {
        compare_cells(Some(cell), actual.cell(cell.column_index()))?;
    }
    Ok(())
}

/// Compare two optional cells.
///
/// An absent cell and a blank cell are interchangeable. Cells of different
/// kinds never match; cells of the same kind are compared by
/// [`CellKind::same_value`](gridmatch_core::CellKind::same_value).
pub fn compare_cells(expected: Option<&Cell>, actual: Option<&Cell>) -> Comparison {
    if is_absent_or_blank(expected) && is_absent_or_blank(actual) {
        return Ok(());
    }

    let (expected, actual) = match (expected, actual) {
        (Some(e), Some(a)) => (e, a),
        (Some(e), None) => {
            return Err(Discrepancy::CellMissing {
                address: e.address(),
                missing_from: Side::Actual,
            })
        }
        (None, Some(a)) => {
            return Err(Discrepancy::CellMissing {
                address: a.address(),
                missing_from: Side::Expected,
            })
        }
        // both absent is covered by the blank check above
        (None, None) => return Ok(()),
    };

    let expected_kind = expected.kind();
    let actual_kind = actual.kind();
    if expected_kind != actual_kind {
        return Err(Discrepancy::TypeMismatch {
            address: expected.address(),
            expected: expected_kind,
            actual: actual_kind,
        });
    }

    if !expected_kind.same_value(expected.value(), actual.value()) {
        return Err(Discrepancy::ValueMismatch {
            address: expected.address(),
            kind: expected_kind,
            expected: expected.value().to_string(),
            actual: actual.value().to_string(),
        });
    }
    Ok(())
}

/// Compare two workbooks sheet by sheet.
///
/// Sheet counts must agree, every expected sheet must have a same-named
/// actual sheet, and each such pair must compare equal. Discrepancies found
/// inside a sheet are wrapped in [`Discrepancy::InSheet`].
pub fn compare_workbooks(expected: &Workbook, actual: &Workbook) -> Comparison {
    if expected.sheet_count() != actual.sheet_count() {
        return Err(Discrepancy::SheetCountMismatch {
            expected: expected.sheet_count(),
            actual: actual.sheet_count(),
        });
    }

    for sheet in expected.sheets() {
        let Some(other) = actual.sheet_by_name(sheet.name()) else {
            return Err(Discrepancy::SheetMissing {
                name: sheet.name().to_string(),
            });
        };
        compare_sheets(sheet, other).map_err(|d| d.in_sheet(sheet.name()))?;
    }
    Ok(())
}

fn is_absent_or_blank(cell: Option<&Cell>) -> bool {
    cell.map_or(true, Cell::is_blank)
}
