//! Error types for marketrelay.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid body: {0}")]
    InvalidBody(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
