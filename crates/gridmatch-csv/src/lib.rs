//! # gridmatch-csv
//!
//! Reads CSV fixtures into [`Sheet`](gridmatch_core::Sheet)s so expected
//! spreadsheets can live next to the tests that use them.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
