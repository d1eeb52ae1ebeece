//! Assertions built on [`Matcher`]

use thiserror::Error;

use crate::matcher::{Description, Matcher};

/// A failed assertion: what was expected and why the actual value differs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\nExpected: {expected}\n     but: {mismatch}")]
pub struct AssertionFailure {
    pub expected: String,
    pub mismatch: String,
}

/// Run `matcher` against `actual` without panicking.
pub fn check<T, M>(actual: &T, matcher: &M) -> Result<(), AssertionFailure>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    let mut mismatch = Description::new();
    if matcher.matches(actual, &mut mismatch) {
        return Ok(());
    }

    let mut expected = Description::new();
    matcher.describe_to(&mut expected);
    Err(AssertionFailure {
        expected: expected.to_string(),
        mismatch: mismatch.to_string(),
    })
}

/// Assert that `actual` satisfies `matcher`, panicking with both
/// descriptions otherwise.
///
/// ```should_panic
/// use gridmatch::{assert_that, rows_equal};
/// use gridmatch_core::Sheet;
///
/// let mut expected = Sheet::new("Data");
/// expected.set_cell_value("B3", "5").unwrap();
/// let mut actual = Sheet::new("Data");
/// actual.set_cell_value("B3", 5.0).unwrap();
///
/// assert_that(&actual, &rows_equal(&expected));
/// ```
#[track_caller]
pub fn assert_that<T, M>(actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Err(failure) = check(actual, matcher) {
        panic!("{}", failure);
    }
}

/// Assert that a sheet is row-equal to an expected sheet.
///
/// Extra arguments are formatted and prefixed to the failure message.
#[macro_export]
macro_rules! assert_sheet_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_that(&$actual, &$crate::rows_equal(&$expected))
    };
    ($actual:expr, $expected:expr, $($arg:tt)+) => {
        if let Err(failure) = $crate::check(&$actual, &$crate::rows_equal(&$expected)) {
            panic!("{}{}", format_args!($($arg)+), failure);
        }
    };
}

/// Assert that a workbook equals an expected workbook.
///
/// Extra arguments are formatted and prefixed to the failure message.
#[macro_export]
macro_rules! assert_workbook_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_that(&$actual, &$crate::same_workbook(&$expected))
    };
    ($actual:expr, $expected:expr, $($arg:tt)+) => {
        if let Err(failure) = $crate::check(&$actual, &$crate::same_workbook(&$expected)) {
            panic!("{}{}", format_args!($($arg)+), failure);
        }
    };
}
