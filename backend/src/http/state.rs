//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::services::Dashboard;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// View bindings over the read-only launch dataset
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Create application state with the standard pie and scatter bindings.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dashboard: Arc::new(Dashboard::standard(dataset)),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.dashboard.dataset()
    }
}
