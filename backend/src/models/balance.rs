use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the column the minimum-total filter reads.
pub const TOTAL_COLUMN: &str = "Total";

/// A weekly payout report: the header row of the first sheet plus its data rows.
///
/// Cells are passed through as JSON scalars; only `Total` is interpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl BalanceTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Numeric reading of a `Total` cell. Text, booleans and empty cells are not totals.
pub fn total_value(cell: &Value) -> Option<f64> {
    cell.as_f64()
}
