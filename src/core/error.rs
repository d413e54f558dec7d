//! Errors surfaced by the command-line layer.  The service itself never fails.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiasError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("cannot summarise an empty sample")]
    EmptySample,
    #[error("histogram needs at least one bin")]
    InvalidBins,
}
