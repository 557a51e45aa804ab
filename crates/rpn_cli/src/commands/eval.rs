//! `rpn eval <token>...`

use std::io::Write;

use rpn_eval::Evaluator;

use super::report;
use crate::error::CliError;
use crate::options::DriverOptions;
use crate::token::Token;

/// Push `tokens` in order into a fresh evaluator and print the final result.
pub fn eval_tokens<W: Write>(
    tokens: &[String],
    options: &DriverOptions,
    out: &mut W,
) -> Result<Option<f64>, CliError> {
    if tokens.is_empty() {
        return Err(CliError::MissingTokens);
    }

    let mut calc = Evaluator::new();
    let mut result = None;
    for word in tokens {
        result = Token::classify(word).push(&mut calc);
    }

    tracing::debug!(tokens = tokens.len(), ?result, "evaluated");
    report(&calc, result, options, out)?;
    Ok(result)
}
