//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::DatasetStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dataset snapshot owner
    pub store: Arc<DatasetStore>,
}

impl AppState {
    /// Create a new application state with the given store.
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}
