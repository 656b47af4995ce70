//! Workbook ingestion.
//!
//! [`workbook`] opens uploads with calamine and turns sheets into typed
//! records; [`cells`] holds the best-effort coercions applied to every cell;
//! [`names`] normalizes courier display names.

pub mod cells;
pub mod names;
pub mod workbook;

pub use names::normalize_name;
pub use workbook::{columns, read_balance_table, read_delivery_records, Workbook};
