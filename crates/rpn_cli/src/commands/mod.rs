//! Command handlers for the `rpn` CLI.
//!
//! Each submodule implements one command. Handlers write to a caller-supplied
//! writer so tests can capture their output.

mod eval;
mod ops;
mod repl;

pub use eval::eval_tokens;
pub use ops::list_operators;
pub use repl::run_repl;

use std::io::Write;

use rpn_eval::Evaluator;

use crate::error::CliError;
use crate::format::{format_result, format_stack};
use crate::options::DriverOptions;

/// Write the result line, preceded by the stack line if requested.
fn report<W: Write>(
    calc: &Evaluator,
    result: Option<f64>,
    options: &DriverOptions,
    out: &mut W,
) -> Result<(), CliError> {
    if options.show_stack {
        writeln!(out, "{}", format_stack(calc))?;
    }
    writeln!(out, "{}", format_result(result, options))?;
    Ok(())
}
