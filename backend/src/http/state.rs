//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
///
/// Only read-only configuration lives here; views keep no state between
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
