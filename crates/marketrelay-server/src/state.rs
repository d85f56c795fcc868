//! Shared application state.

use marketrelay_core::{PayloadStore, RelayConfig};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: RelayConfig,
    pub payloads: PayloadStore,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            payloads: PayloadStore::new(),
        }
    }
}
