use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the form and HTTP layers
#[derive(Debug, Error)]
pub enum CarePlanError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("No output directory available for saving care plans")]
    NoOutputDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
