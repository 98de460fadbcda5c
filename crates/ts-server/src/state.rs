//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;
use ts_core::SimplifierConfig;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<SimplifierConfig>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(SimplifierConfig::default())
    }

    pub fn with_config(config: SimplifierConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
