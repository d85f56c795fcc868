//! marketrelay core — relayed payload, normalization, store, configuration.

pub mod config;
pub mod error;
pub mod payload;
pub mod store;

pub use config::RelayConfig;
pub use error::{Error, Result};
pub use payload::Payload;
pub use store::PayloadStore;
