//! `rpn repl`: line-oriented session over one evaluator.
//!
//! Every word on a line is pushed in order, then the result is printed.
//! `clear`/`c` empties the stack and `quit`/`exit` ends the session; both
//! are only recognised as whole words. Words before `quit` on the same line
//! are still reported.

use std::io::{BufRead, Write};

use rpn_eval::Evaluator;

use super::report;
use crate::error::CliError;
use crate::options::DriverOptions;
use crate::token::Token;

/// Run a session reading from `input` until EOF or `quit`.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    options: &DriverOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let mut calc = Evaluator::new();

    for line in input.lines() {
        let line = line?;
        let mut result = None;
        let mut pushed = false;

        for word in line.split_whitespace() {
            match word {
                "quit" | "exit" => {
                    if pushed {
                        report(&calc, result, options, out)?;
                    }
                    return Ok(());
                }
                "clear" | "c" => {
                    calc.clear();
                    result = None;
                }
                _ => result = Token::classify(word).push(&mut calc),
            }
            pushed = true;
        }

        if pushed {
            report(&calc, result, options, out)?;
        }
    }

    Ok(())
}
