//! The evaluator: an operator registry plus the stack of pushed entries.

use std::fmt;

use crate::builder::EvaluatorBuilder;
use crate::entry::Entry;
use crate::reduce::reduce;
use crate::registry::OperatorRegistry;

/// An RPN calculator.
///
/// Every push appends one entry and returns the value the whole stack now
/// reduces to. Evaluation never modifies the stack, and nothing here fails:
/// an empty or incomplete stack simply has no value.
///
/// ```
/// use rpn_eval::Evaluator;
///
/// let mut calc = Evaluator::new();
/// calc.push_operand(10.0);
/// calc.push_operand(4.0);
/// assert_eq!(calc.push_operator("−"), Some(6.0));
/// ```
#[derive(Clone, Debug)]
pub struct Evaluator {
    registry: OperatorRegistry,
    stack: Vec<Entry>,
}

impl Evaluator {
    /// An evaluator with the built-in operators and an empty stack.
    pub fn new() -> Self {
        Self::with_registry(OperatorRegistry::with_builtins())
    }

    /// An evaluator over a caller-supplied registry.
    pub fn with_registry(registry: OperatorRegistry) -> Self {
        Evaluator {
            registry,
            stack: Vec::new(),
        }
    }

    /// Start building an evaluator with extra operators.
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Push a number and evaluate.
    ///
    /// Any `f64` is accepted; NaN and infinities flow through the arithmetic.
    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        tracing::trace!(value, "push operand");
        self.stack.push(Entry::Operand(value));
        self.evaluate()
    }

    /// Push the operator registered as `symbol` and evaluate.
    ///
    /// An unknown symbol leaves the stack untouched; the result is then
    /// whatever the existing stack evaluates to.
    pub fn push_operator(&mut self, symbol: &str) -> Option<f64> {
        match self.registry.lookup(symbol) {
            Some(def) => {
                tracing::trace!(symbol, "push operator");
                self.stack.push(def.to_entry());
            }
            None => tracing::debug!(symbol, "ignoring unknown operator"),
        }
        self.evaluate()
    }

    /// The value the current stack reduces to.
    #[tracing::instrument(level = "trace", skip(self), fields(depth = self.stack.len()), ret)]
    pub fn evaluate(&self) -> Option<f64> {
        reduce(&self.stack).result
    }

    /// Drop every pushed entry. The registry is kept.
    pub fn clear(&mut self) {
        tracing::trace!(dropped = self.stack.len(), "clear stack");
        self.stack.clear();
    }

    /// Pushed entries, oldest first.
    pub fn entries(&self) -> &[Entry] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the stack oldest first, e.g. `4 5 +`.
impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.stack.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
