use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Performance view types + route
// =========================================================

pub const PERFORMANCE_HEADER: &str = "📊 Performance dos Entregadores";
pub const PERFORMANCE_PLACEHOLDER: &str = "Envie o arquivo Excel para visualizar a performance.";

/// Human-readable column labels of the performance tables.
pub mod labels {
    pub const COURIER: &str = "Entregador";
    pub const DATE: &str = "Data";
    pub const RIDES_OFFERED: &str = "Rotas Ofertadas";
    pub const RIDES_ACCEPTED: &str = "Rotas Aceitas";
    pub const RIDES_REJECTED: &str = "Rotas Rejeitadas";
    pub const ACCEPTANCE_RATE: &str = "Taxa de Aceite (%)";
    pub const ONLINE_TIME: &str = "Porcentagem Tempo Online (%)";
}

/// One courier in the summary table.
///
/// Percentages are `None` when their denominator is zero and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierSummaryRow {
    #[serde(rename = "Entregador")]
    pub courier: String,
    #[serde(rename = "Rotas Ofertadas")]
    pub rides_offered: i64,
    #[serde(rename = "Rotas Aceitas")]
    pub rides_accepted: i64,
    #[serde(rename = "Rotas Rejeitadas")]
    pub rides_rejected: i64,
    #[serde(rename = "Taxa de Aceite (%)")]
    pub acceptance_rate: Option<f64>,
    #[serde(rename = "Porcentagem Tempo Online (%)")]
    pub online_time_pct: Option<f64>,
}

/// One date of a courier's drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierDetailRow {
    #[serde(rename = "Data")]
    pub date: NaiveDate,
    #[serde(rename = "Rotas Ofertadas")]
    pub rides_offered: i64,
    #[serde(rename = "Rotas Aceitas")]
    pub rides_accepted: i64,
    #[serde(rename = "Rotas Rejeitadas")]
    pub rides_rejected: i64,
    #[serde(rename = "Taxa de Aceite (%)")]
    pub acceptance_rate: Option<f64>,
}

/// Summary table of all couriers left after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierSummaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<CourierSummaryRow>,
}

/// Per-date breakdown for the selected courier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierDetails {
    pub subheader: String,
    pub courier: String,
    pub columns: Vec<String>,
    pub rows: Vec<CourierDetailRow>,
}

/// Values offered by the sidebar multi-selects, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub sub_regions: Vec<String>,
    pub shift_periods: Vec<String>,
}

/// Everything the performance view renders for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceView {
    pub header: String,
    /// Informational placeholder, set when nothing was uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<FilterOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CourierSummaryTable>,
    /// Couriers the detail selector offers; the first one is the default.
    #[serde(default)]
    pub courier_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_courier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CourierDetails>,
}

impl PerformanceView {
    /// View rendered before any file is uploaded.
    pub fn placeholder() -> Self {
        Self {
            header: PERFORMANCE_HEADER.to_string(),
            info: Some(PERFORMANCE_PLACEHOLDER.to_string()),
            filter_options: None,
            summary: None,
            courier_options: Vec::new(),
            selected_courier: None,
            details: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.info.is_some() && self.summary.is_none()
    }
}

pub fn summary_columns() -> Vec<String> {
    [
        labels::COURIER,
        labels::RIDES_OFFERED,
        labels::RIDES_ACCEPTED,
        labels::RIDES_REJECTED,
        labels::ACCEPTANCE_RATE,
        labels::ONLINE_TIME,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn detail_columns() -> Vec<String> {
    [
        labels::DATE,
        labels::RIDES_OFFERED,
        labels::RIDES_ACCEPTED,
        labels::RIDES_REJECTED,
        labels::ACCEPTANCE_RATE,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn details_subheader(courier: &str) -> String {
    format!("Detalhes do Entregador: {}", courier)
}

pub const POST_PERFORMANCE: &str = "/performance";
