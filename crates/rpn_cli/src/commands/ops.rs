//! `rpn ops`

use std::io::Write;

use rpn_eval::{Arity, Evaluator};

use crate::error::CliError;

/// Print every operator `calc` knows, one per line, sorted by symbol.
pub fn list_operators<W: Write>(calc: &Evaluator, out: &mut W) -> Result<(), CliError> {
    for def in calc.registry().definitions() {
        let arity = match def.arity() {
            Arity::Unary => "unary",
            Arity::Binary => "binary",
        };
        writeln!(out, "{:<4} {arity}", def.symbol())?;
    }
    Ok(())
}
