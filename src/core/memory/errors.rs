use std::path::PathBuf;
use thiserror::Error;

/// `" <path>"` when a path is known, empty otherwise
fn located(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| format!(" {}", path.display()))
        .unwrap_or_default()
}

/// Rejected simulation parameters, detected before anything is loaded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("frame count must be a positive integer")]
    ZeroFrames,
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Failure to produce a usable trace
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("cannot read trace file{}: {source}", located(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
    #[error("Empty or invalid trace file{}", located(.path))]
    Empty { path: Option<PathBuf> },
}

/// Anything that stops a run before the first access is simulated
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
