//! RPN CLI - command-line driver for `rpn_eval`.
//!
//! Converts words typed on the command line (or read from stdin) into
//! operand and operator pushes, and prints the evaluator's result. The
//! driver adds no evaluation rules of its own.

pub mod commands;
pub mod error;
pub mod format;
pub mod options;
pub mod token;
pub mod tracing_setup;

pub use error::CliError;
pub use options::DriverOptions;
pub use token::Token;
