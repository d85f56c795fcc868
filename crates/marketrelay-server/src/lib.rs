//! marketrelay server — HTTP bridge between the extension popup and the
//! marketplace content script.

pub mod cli;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
