//! Assertion-style matchers over sheets and workbooks

use std::fmt;

use gridmatch_core::{Sheet, Workbook};

use crate::compare::{compare_sheets, compare_workbooks};

/// Accumulated text describing an expectation or a mismatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    /// Create an empty description
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text
    pub fn append_text(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text.push_str(text.as_ref());
        self
    }

    /// Append a value in its quoted debug form (e.g. `"Sheet1"`)
    pub fn append_value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        self.text.push_str(&format!("{:?}", value));
        self
    }

    /// The text accumulated so far
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A predicate over `T` that can explain itself and its failures
pub trait Matcher<T: ?Sized> {
    /// Test `actual`, appending an explanation to `mismatch` when it does not match
    fn matches(&self, actual: &T, mismatch: &mut Description) -> bool;

    /// Describe what a matching value looks like
    fn describe_to(&self, description: &mut Description);
}

/// Matches a sheet whose rows equal those of an expected sheet
#[derive(Debug, Clone, Copy)]
pub struct RowEqualityMatcher<'a> {
    expected: &'a Sheet,
}

/// Match sheets row-equal to `expected`.
///
/// Only rows present in `expected` are compared.
pub fn rows_equal(expected: &Sheet) -> RowEqualityMatcher<'_> {
    RowEqualityMatcher { expected }
}

impl Matcher<Sheet> for RowEqualityMatcher<'_> {
    fn matches(&self, actual: &Sheet, mismatch: &mut Description) -> bool {
        match compare_sheets(self.expected, actual) {
            Ok(()) => true,
            Err(discrepancy) => {
                mismatch.append_text(discrepancy.to_string());
                false
            }
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("equality on all rows in ")
            .append_value(self.expected.name());
    }
}

/// Matches a workbook with the same sheets, each row-equal to the expected one
#[derive(Debug, Clone, Copy)]
pub struct WorkbookMatcher<'a> {
    expected: &'a Workbook,
}

/// Match workbooks equal to `expected`: same sheet count, same sheet names,
/// and row-equal sheets.
pub fn same_workbook(expected: &Workbook) -> WorkbookMatcher<'_> {
    WorkbookMatcher { expected }
}

impl Matcher<Workbook> for WorkbookMatcher<'_> {
    fn matches(&self, actual: &Workbook, mismatch: &mut Description) -> bool {
        match compare_workbooks(self.expected, actual) {
            Ok(()) => true,
            Err(discrepancy) => {
                mismatch.append_text(discrepancy.to_string());
                false
            }
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("entire workbook to be equal to one with sheets ")
            .append_value(&self.expected.sheet_names());
    }
}
