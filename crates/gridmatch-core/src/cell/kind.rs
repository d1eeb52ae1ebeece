//! Semantic cell kinds

use std::fmt;

use super::CellValue;

/// The semantic type of a cell
///
/// Two cells can only hold equal values when their kinds match. The numeric
/// codes are the legacy spreadsheet cell-type codes (0 = numeric .. 5 = error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Numeric,
    String,
    Formula,
    Blank,
    Boolean,
    Error,
}

impl CellKind {
    /// Classify a value
    pub fn of(value: &CellValue) -> Self {
        match value {
            CellValue::Numeric(_) => CellKind::Numeric,
            CellValue::String(_) => CellKind::String,
            CellValue::Formula(_) => CellKind::Formula,
            CellValue::Blank => CellKind::Blank,
            CellValue::Boolean(_) => CellKind::Boolean,
            CellValue::Error(_) => CellKind::Error,
        }
    }

    /// Map a legacy cell-type code to a kind
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellKind::Numeric),
            1 => Some(CellKind::String),
            2 => Some(CellKind::Formula),
            3 => Some(CellKind::Blank),
            4 => Some(CellKind::Boolean),
            5 => Some(CellKind::Error),
            _ => None,
        }
    }

    /// Legacy cell-type code
    pub fn code(&self) -> u8 {
        match self {
            CellKind::Numeric => 0,
            CellKind::String => 1,
            CellKind::Formula => 2,
            CellKind::Blank => 3,
            CellKind::Boolean => 4,
            CellKind::Error => 5,
        }
    }

    /// Upper-case name used in mismatch messages
    pub fn name(&self) -> &'static str {
        match self {
            CellKind::Numeric => "NUMERIC",
            CellKind::String => "STRING",
            CellKind::Formula => "FORMULA",
            CellKind::Blank => "BLANK",
            CellKind::Boolean => "BOOLEAN",
            CellKind::Error => "ERROR",
        }
    }

    /// Compare two values of this kind.
    ///
    /// Numbers compare by value (two NaNs are equal), strings exactly,
    /// booleans by value and formulas by their text. Blank and error cells
    /// carry nothing comparable and always match. Values of another kind
    /// never match.
    pub fn same_value(&self, expected: &CellValue, actual: &CellValue) -> bool {
        match (self, expected, actual) {
            (CellKind::Numeric, CellValue::Numeric(a), CellValue::Numeric(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (CellKind::String, CellValue::String(a), CellValue::String(b)) => a == b,
            (CellKind::Boolean, CellValue::Boolean(a), CellValue::Boolean(b)) => a == b,
            (CellKind::Formula, CellValue::Formula(_), CellValue::Formula(_)) => {
                expected.formula_text() == actual.formula_text()
            }
            (CellKind::Blank, CellValue::Blank, CellValue::Blank) => true,
            (CellKind::Error, CellValue::Error(_), CellValue::Error(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellError;

    #[test]
    fn test_classify() {
        assert_eq!(CellKind::of(&CellValue::Numeric(1.0)), CellKind::Numeric);
        assert_eq!(CellKind::of(&CellValue::string("5")), CellKind::String);
        assert_eq!(CellKind::of(&CellValue::formula("A1")), CellKind::Formula);
        assert_eq!(CellKind::of(&CellValue::Blank), CellKind::Blank);
        assert_eq!(CellKind::of(&CellValue::Boolean(true)), CellKind::Boolean);
        assert_eq!(
            CellKind::of(&CellValue::Error(CellError::Ref)),
            CellKind::Error
        );
    }

    #[test]
    fn test_codes() {
        for code in 0..=5 {
            let kind = CellKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert_eq!(CellKind::from_code(6), None);
        assert_eq!(CellKind::from_code(3), Some(CellKind::Blank));
    }

    #[test]
    fn test_same_value() {
        let kind = CellKind::Numeric;
        assert!(kind.same_value(&CellValue::Numeric(3.14), &CellValue::Numeric(3.14)));
        assert!(!kind.same_value(&CellValue::Numeric(3.14), &CellValue::Numeric(3.15)));
        assert!(kind.same_value(&CellValue::Numeric(f64::NAN), &CellValue::Numeric(f64::NAN)));

        assert!(!CellKind::String.same_value(&CellValue::string("a"), &CellValue::string("A")));
        assert!(CellKind::Formula.same_value(
            &CellValue::formula("=A1"),
            &CellValue::formula("A1")
        ));
        assert!(CellKind::Formula.same_value(
            &CellValue::Formula("=A1".to_string()),
            &CellValue::formula("A1")
        ));
        assert!(CellKind::Error.same_value(
            &CellValue::Error(CellError::Na),
            &CellValue::Error(CellError::Ref)
        ));

        // Kind disagrees with the values
        assert!(!CellKind::String.same_value(&CellValue::Numeric(5.0), &CellValue::Numeric(5.0)));
    }
}
