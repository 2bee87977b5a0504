//! Application state for the roster engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::schedule::GridOptions;

/// Shared application state.
///
/// Holds the loaded configuration shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured grid layout.
    pub fn grid_options(&self) -> GridOptions {
        self.config.grid_options()
    }
}
