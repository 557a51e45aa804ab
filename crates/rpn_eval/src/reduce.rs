//! Stack reduction.
//!
//! Collapses a sequence of entries into a value by consuming it from the end
//! (most recently pushed) towards the start:
//!
//! - an operand is a complete expression on its own;
//! - a unary operator reduces what precedes it once and applies itself;
//! - a binary operator reduces what precedes it twice: first the operand
//!   closer to it, then the one farther away, and calls
//!   `apply(closer, farther)`.
//!
//! Whatever is left over is returned as the remainder, which is always a
//! prefix of the input. When an operator cannot find enough operands, the
//! reduction at that level yields no value and the remainder is the *whole*
//! input it was given, not the partially consumed one.

use crate::entry::Entry;
use crate::stack::ensure_sufficient_stack;

/// Outcome of reducing a sequence of entries.
#[derive(Clone, Copy, Debug)]
pub struct Reduction<'a> {
    /// The value of the topmost complete expression, if there is one.
    pub result: Option<f64>,
    /// Entries below that expression, left unconsumed.
    pub remaining: &'a [Entry],
}

impl<'a> Reduction<'a> {
    #[inline]
    fn value(result: f64, remaining: &'a [Entry]) -> Self {
        Reduction {
            result: Some(result),
            remaining,
        }
    }

    #[inline]
    fn incomplete(entries: &'a [Entry]) -> Self {
        Reduction {
            result: None,
            remaining: entries,
        }
    }
}

/// Reduce `entries` from the end.
///
/// Recursion depth grows with the number of pending operators; each step
/// runs under [`ensure_sufficient_stack`].
pub fn reduce(entries: &[Entry]) -> Reduction<'_> {
    ensure_sufficient_stack(|| reduce_last(entries))
}

fn reduce_last(entries: &[Entry]) -> Reduction<'_> {
    let Some((last, rest)) = entries.split_last() else {
        return Reduction::incomplete(entries);
    };

    match last {
        Entry::Operand(value) => return Reduction::value(*value, rest),
        Entry::Unary { apply, .. } => {
            let operand = reduce(rest);
            if let Some(value) = operand.result {
                return Reduction::value(apply(value), operand.remaining);
            }
        }
        Entry::Binary { apply, .. } => {
            let closer = reduce(rest);
            if let Some(first) = closer.result {
                let farther = reduce(closer.remaining);
                if let Some(second) = farther.result {
                    return Reduction::value(apply(first, second), farther.remaining);
                }
            }
        }
    }

    Reduction::incomplete(entries)
}

#[cfg(test)]
mod tests;
