//! Error taxonomy for pipeline stages.
//!
//! Any of these variants aborts the current stage before an output artifact
//! is written; empty extraction results are not errors and are surfaced as
//! warnings by the workflow layer instead.
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised by the storage and aggregation layers.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required column is absent from a tabular input.
    #[error("required column {column:?} not found in {path} (available: {available})")]
    Configuration {
        column: String,
        path: PathBuf,
        available: String,
    },

    /// An input path does not exist.
    #[error("input not found: {0}")]
    NotFound(PathBuf),

    /// Malformed tabular or document content.
    #[error("malformed content in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Underlying I/O failure outside parse/config concerns.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
