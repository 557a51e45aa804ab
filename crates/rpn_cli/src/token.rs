//! Token classification.
//!
//! Turns one whitespace-separated word into either an operand or an operator
//! symbol. Anything that parses as `f64` is an operand, so `-5`, `1e3`, `inf`
//! and `NaN` are numbers. A few ASCII spellings are mapped to the built-in
//! symbols so they can be typed on a plain keyboard.

use rpn_eval::{symbols, Evaluator};

/// A classified input word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token<'a> {
    Operand(f64),
    Symbol(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(word: &'a str) -> Self {
        match word.parse::<f64>() {
            Ok(value) => Token::Operand(value),
            Err(_) => Token::Symbol(normalize_symbol(word)),
        }
    }

    /// Push this token and return the new result.
    pub fn push(self, calc: &mut Evaluator) -> Option<f64> {
        match self {
            Token::Operand(value) => calc.push_operand(value),
            Token::Symbol(symbol) => calc.push_operator(symbol),
        }
    }
}

/// Map ASCII aliases to built-in symbols; other words pass through unchanged.
pub fn normalize_symbol(word: &str) -> &str {
    match word {
        "*" | "x" => symbols::MULTIPLY,
        "/" => symbols::DIVIDE,
        "-" => symbols::SUBTRACT,
        "sqrt" => symbols::SQUARE_ROOT,
        other => other,
    }
}
