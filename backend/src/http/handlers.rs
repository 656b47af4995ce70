//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic. Workbook parsing is CPU-bound, so the
//! view computations run on the blocking pool.

use axum::{
    extract::{Multipart, State},
    Json,
};

use super::dto::{DashboardInfo, HealthResponse, PerformanceView, ValuationView};
use super::error::AppError;
use super::state::AppState;
use super::upload;
use crate::routes::landing::dashboard_info;
use crate::services::{build_performance_view, build_valuation_view};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard
///
/// Dashboard title and the views offered by the sidebar selector.
pub async fn get_dashboard() -> HandlerResult<DashboardInfo> {
    Ok(Json(dashboard_info()))
}

// =============================================================================
// Views
// =============================================================================

/// POST /v1/performance
///
/// Render the performance view for the uploaded workbook and widget values.
pub async fn post_performance(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> HandlerResult<PerformanceView> {
    let form = upload::read_fields(&mut multipart).await?;
    let (workbook, params) = upload::performance_form(form)?;

    if let Some(file) = &workbook {
        tracing::info!(file = %file.file_name, bytes = file.len(), "performance upload");
    }

    let sheet = state.config.uploads.performance_sheet.clone();
    let view = tokio::task::spawn_blocking(move || build_performance_view(workbook, &params, &sheet))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(view))
}

/// POST /v1/valores
///
/// Render the valuation view for the uploaded payout reports.
pub async fn post_valuation(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> HandlerResult<ValuationView> {
    let form = upload::read_fields(&mut multipart).await?;
    let (uploads, min_total) = upload::valuation_form(form)?;

    let max_files = state.config.uploads.max_balance_files;
    if uploads.len() > max_files {
        return Err(AppError::BadRequest(format!(
            "at most {} balance files can be uploaded, got {}",
            max_files,
            uploads.len()
        )));
    }
    tracing::info!(files = uploads.len(), min_total, "valuation upload");

    let view = tokio::task::spawn_blocking(move || build_valuation_view(uploads, min_total))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(view))
}
