//! Service layer for business logic and orchestration.
//!
//! This module sits between workbook parsing and the HTTP handlers. Each
//! view is computed from scratch on every call from the uploaded file(s)
//! and the widget values passed in.

pub mod filters;
pub mod metrics;
pub mod performance;
pub mod valuation;


pub use performance::{build_performance_view, PerformanceParams, DEFAULT_PERFORMANCE_SHEET};
pub use valuation::build_valuation_view;
