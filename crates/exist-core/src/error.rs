//! Error types for `exist-core`.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single export file could not be classified.
#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed file name: {0:?}")]
  MalformedFileName(String),

  #[error("could not read file: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("json root is not an array of records")]
  NotAnArray,

  #[error("record {index} is not an object")]
  RecordNotObject { index: usize },

  #[error("record {index} has no 'value' property")]
  MissingValue { index: usize },

  #[error("data is all null")]
  AllNull,

  #[error("record {index} has an array/object value")]
  UnsupportedShape { index: usize },
}

/// A per-file failure. Removes exactly one file from the output.
#[derive(Debug, Error)]
#[error("{}: {source}", path.display())]
pub struct FileError {
  pub path:   PathBuf,
  #[source]
  pub source: Error,
}

impl FileError {
  pub fn new(path: impl Into<PathBuf>, source: Error) -> Self {
    Self { path: path.into(), source }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
