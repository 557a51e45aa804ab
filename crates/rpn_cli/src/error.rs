//! Driver errors.
//!
//! Evaluation itself cannot fail; these cover bad command lines and I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    #[error("invalid precision `{0}` (expected a number of decimal places)")]
    InvalidPrecision(String),

    #[error("missing tokens to evaluate")]
    MissingTokens,

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
