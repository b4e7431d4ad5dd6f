//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::PayrollStore;

/// Shared application state.
///
/// Holds the loaded configuration and the storage handle. Both are created
/// once at startup and shared by reference across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<PayrollStore>,
}

impl AppState {
    /// Creates application state from a configuration and a storage handle.
    pub fn new(config: ConfigLoader, store: Arc<PayrollStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the payroll store.
    pub fn store(&self) -> &PayrollStore {
        &self.store
    }
}
