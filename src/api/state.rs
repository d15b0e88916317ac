//! Application state for the Tool Box engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded reference tables (legal-matter presets and the national holiday
/// table). Each request builds its own calculation session from them, so
/// concurrent requests never share mutable calendar state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded reference tables.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_config() {
        let state = AppState::new(ConfigLoader::embedded());
        assert_eq!(state.config().matters().len(), 6);
    }
}
