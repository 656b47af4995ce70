use serde::{Deserialize, Serialize};
use serde_json::Value;

// =========================================================
// Valuation view types + route
// =========================================================

pub const VALUATION_HEADER: &str = "💰 Valores da Semana";
pub const VALUATION_PLACEHOLDER: &str = "Envie os arquivos Excel para visualizar os valores da semana.";

/// One uploaded payout report after the minimum-total filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTableView {
    pub subheader: String,
    pub file_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Row count before filtering.
    pub total_rows: usize,
}

/// Everything the valuation view renders for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationView {
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    pub min_total: f64,
    #[serde(default)]
    pub tables: Vec<BalanceTableView>,
}

impl ValuationView {
    /// View rendered before any file is uploaded.
    pub fn placeholder(min_total: f64) -> Self {
        Self {
            header: VALUATION_HEADER.to_string(),
            info: Some(VALUATION_PLACEHOLDER.to_string()),
            min_total,
            tables: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.info.is_some() && self.tables.is_empty()
    }
}

pub fn table_subheader(file_name: &str) -> String {
    format!("Valores - {}", file_name)
}

pub const POST_VALUATION: &str = "/valores";
