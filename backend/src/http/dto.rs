//! Data Transfer Objects for the HTTP API.
//!
//! View DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Landing
    DashboardInfo, ViewInfo,
    // Performance
    CourierDetailRow, CourierDetails, CourierSummaryRow, CourierSummaryTable, FilterOptions,
    PerformanceView,
    // Valuation
    BalanceTableView, ValuationView,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// Multipart field names accepted by the view endpoints.
pub mod fields {
    pub const PERFORMANCE_FILE: &str = "file";
    pub const SUB_REGION: &str = "sub_praca";
    pub const SHIFT_PERIOD: &str = "periodo";
    pub const DATE: &str = "data";
    pub const COURIER: &str = "entregador";
    pub const SHOW_DETAILS: &str = "ver_detalhes";
    pub const BALANCE_FILE: &str = "saldo";
    pub const MIN_TOTAL: &str = "valor_minimo";
}
