//! Error types for the seed data converters.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
///
/// A map reference missing from the map table is not an error; the
/// generator keeps the row as a commented-out statement instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{table} table has no header row")]
    MissingHeader { table: &'static str },

    #[error("{table} table, line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        table: &'static str,
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
