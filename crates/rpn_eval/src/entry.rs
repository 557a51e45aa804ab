//! Stack entries.
//!
//! An [`Entry`] is one pushed element: either a literal operand or an
//! operator carrying its own function pointer. Operators are copied out of
//! the registry at push time, so a stack never refers back to the registry
//! while it is being reduced.

use std::fmt;
use std::sync::Arc;

/// One-argument operator function.
pub type UnaryFn = fn(f64) -> f64;

/// Two-argument operator function.
///
/// Called as `apply(closer, farther)`: `closer` is the operand reduced first
/// (pushed last), `farther` the one pushed before it. Subtraction is therefore
/// `farther - closer`.
pub type BinaryFn = fn(f64, f64) -> f64;

/// A single element of the evaluation stack.
#[derive(Clone, Debug)]
pub enum Entry {
    /// A literal number.
    Operand(f64),
    /// A named one-argument operator.
    Unary { symbol: Arc<str>, apply: UnaryFn },
    /// A named two-argument operator.
    Binary { symbol: Arc<str>, apply: BinaryFn },
}

impl Entry {
    /// The operator symbol, or `None` for operands.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Entry::Operand(_) => None,
            Entry::Unary { symbol, .. } | Entry::Binary { symbol, .. } => Some(&**symbol),
        }
    }

    /// Number of operands this entry consumes (0 for operands).
    pub fn arity(&self) -> usize {
        match self {
            Entry::Operand(_) => 0,
            Entry::Unary { .. } => 1,
            Entry::Binary { .. } => 2,
        }
    }

    #[inline]
    pub fn is_operand(&self) -> bool {
        matches!(self, Entry::Operand(_))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Operand(value) => write!(f, "{value}"),
            Entry::Unary { symbol, .. } | Entry::Binary { symbol, .. } => f.write_str(symbol),
        }
    }
}
