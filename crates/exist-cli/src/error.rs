//! Error type for `exist-cli`. Only these abort a run; per-file problems are
//! reported and skipped by `exist-script`.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read input folder {}: {source}", path.display())]
  ReadDir {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("cannot write {}: {source}", path.display())]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
