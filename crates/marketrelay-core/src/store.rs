//! Process-wide payload store.

use parking_lot::RwLock;
use tracing::debug;

use crate::payload::Payload;

/// Holds the single current [`Payload`]. Each write replaces it wholesale;
/// concurrent writers race and the last one wins.
#[derive(Debug, Default)]
pub struct PayloadStore {
    current: RwLock<Payload>,
}

impl PayloadStore {
    /// Create a store holding the default payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored payload.
    pub fn write(&self, payload: Payload) {
        debug!(
            message_len = payload.message.len(),
            search_keyword = %payload.search_keyword,
            "Storing payload"
        );
        *self.current.write() = payload;
    }

    /// Snapshot of the stored payload.
    pub fn read(&self) -> Payload {
        self.current.read().clone()
    }
}
