//! Operator registration errors.
//!
//! Evaluation itself never fails (an incomplete stack is `None`), so the only
//! errors in this crate come from building an operator registry.

use thiserror::Error;

/// Why an operator could not be registered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The symbol is empty or only whitespace.
    #[error("operator symbol must not be empty")]
    EmptySymbol,

    /// The symbol parses as a number, so a driver could never tell it apart
    /// from an operand.
    #[error("operator symbol `{0}` is a number")]
    NumericSymbol(String),

    /// The symbol contains whitespace, so a driver that splits its input on
    /// whitespace could never produce it as one token.
    #[error("operator symbol `{0}` contains whitespace")]
    WhitespaceInSymbol(String),

    /// The symbol is already taken.
    #[error("operator `{0}` is already registered")]
    DuplicateSymbol(String),
}
