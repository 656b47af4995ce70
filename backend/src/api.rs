//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::landing::DashboardInfo;
pub use crate::routes::landing::ViewInfo;
pub use crate::routes::performance::CourierDetailRow;
pub use crate::routes::performance::CourierDetails;
pub use crate::routes::performance::CourierSummaryRow;
pub use crate::routes::performance::CourierSummaryTable;
pub use crate::routes::performance::FilterOptions;
pub use crate::routes::performance::PerformanceView;
pub use crate::routes::valuation::BalanceTableView;
pub use crate::routes::valuation::ValuationView;

pub use crate::models::{BalanceTable, CourierKey, DeliveryRecord, Upload};
pub use crate::services::filters::PerformanceFilters;
pub use crate::services::performance::PerformanceParams;
