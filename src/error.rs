//! Error types for the engine.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("map data truncated: expected {expected} bytes, got {actual}")]
    MapTruncated { expected: usize, actual: usize },

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to load asset {path:?}: {reason}")]
    Asset { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
