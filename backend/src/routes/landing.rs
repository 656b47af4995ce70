use serde::{Deserialize, Serialize};

// =========================================================
// Dashboard landing types + route
// =========================================================

pub const DASHBOARD_TITLE: &str = "Dashboard ABJP SEMANAL";

/// Label shown in the sidebar view selector for the performance view.
pub const PERFORMANCE_VIEW: &str = "Performance";
/// Label shown in the sidebar view selector for the valuation view.
pub const VALUATION_VIEW: &str = "Valores";

/// One entry of the view selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewInfo {
    pub label: String,
    pub header: String,
    /// Path (under `/v1`) the view's form is posted to.
    pub endpoint: String,
}

/// Static description of the dashboard: title and selectable views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub title: String,
    pub views: Vec<ViewInfo>,
}

pub const GET_DASHBOARD: &str = "/dashboard";

/// Describe the dashboard and the views a client can render.
pub fn dashboard_info() -> DashboardInfo {
    DashboardInfo {
        title: DASHBOARD_TITLE.to_string(),
        views: vec![
            ViewInfo {
                label: PERFORMANCE_VIEW.to_string(),
                header: super::performance::PERFORMANCE_HEADER.to_string(),
                endpoint: format!("/v1{}", super::performance::POST_PERFORMANCE),
            },
            ViewInfo {
                label: VALUATION_VIEW.to_string(),
                header: super::valuation::VALUATION_HEADER.to_string(),
                endpoint: format!("/v1{}", super::valuation::POST_VALUATION),
            },
        ],
    }
}
