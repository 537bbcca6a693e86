//! Errors raised while loading, rendering, or writing a seed script.

use std::path::PathBuf;

use seed_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlError {
    /// The configured dataset file does not exist or cannot be read.
    #[error("Input dataset not readable at {path}: {source}")]
    InputMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed script could not be created or written.
    #[error("Cannot write seed script to {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value cannot be represented as a PostgreSQL literal.
    #[error("Malformed literal for {table}.{column}: {reason}")]
    MalformedLiteral {
        table: &'static str,
        column: &'static str,
        reason: String,
    },

    /// An INSERT was built with a different number of values than columns.
    #[error("INSERT INTO {table} lists {columns} columns but {values} values")]
    ColumnMismatch {
        table: &'static str,
        columns: usize,
        values: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
