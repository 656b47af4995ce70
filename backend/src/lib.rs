//! # Courier Delivery Dashboard Backend
//!
//! Weekly reporting over spreadsheet exports of courier delivery shifts
//! and payout balances.
//!
//! The dashboard has two views. The performance view aggregates ride counts
//! and online time per courier from an uploaded `.xlsx` export, with
//! sub-region, shift and date-range filters and a per-date drill-down. The
//! valuation view lists one or two weekly payout reports filtered by a
//! minimum total. Both are pure functions of the uploaded file(s) and the
//! current widget values; nothing is persisted between requests.
//!
//! ## Architecture
//!
//! - [`parsing`]: workbook loading (calamine) and best-effort cell coercion
//! - [`models`]: delivery records, courier aggregates, payout tables
//! - [`services`]: filters, aggregation and derived metrics per view
//! - [`routes`]: view DTOs, labels and route paths
//! - [`api`]: re-exports of the public DTOs
//! - [`config`]: TOML + environment configuration
//! - [`http`]: axum server exposing the views as REST endpoints

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
