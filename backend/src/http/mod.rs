//! HTTP server module for the dashboard backend.
//!
//! Each view of the dashboard is one stateless endpoint: the client posts
//! the uploaded workbook(s) and the current widget values as a multipart
//! form and receives the JSON rendering of the view.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Multipart parsing and validation                       │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Filtering, aggregation, derived metrics                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Parsing Layer (parsing/)                                 │
//! │  - Workbook loading, best-effort cell coercion            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod upload;

pub use router::create_router;
pub use state::AppState;
