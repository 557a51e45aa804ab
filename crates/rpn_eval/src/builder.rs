//! `EvaluatorBuilder` for evaluators with extra operators.
//!
//! Operators can only be added before the evaluator exists; once built, its
//! registry is read-only.

use crate::entry::{BinaryFn, UnaryFn};
use crate::errors::RegistryError;
use crate::evaluator::Evaluator;
use crate::registry::{Operation, OperatorRegistry};

/// Builder for [`Evaluator`].
///
/// Registration errors are held until [`build`](Self::build) so calls can be
/// chained; the first error wins.
///
/// ```
/// use rpn_eval::Evaluator;
///
/// let mut calc = Evaluator::builder()
///     .unary("±", |x| -x)
///     .binary("^", |closer, farther| farther.powf(closer))
///     .build()
///     .unwrap();
///
/// calc.push_operand(2.0);
/// calc.push_operand(10.0);
/// assert_eq!(calc.push_operator("^"), Some(1024.0));
/// ```
#[derive(Debug)]
pub struct EvaluatorBuilder {
    registry: OperatorRegistry,
    error: Option<RegistryError>,
}

impl EvaluatorBuilder {
    /// Start from the built-in operators.
    pub fn new() -> Self {
        Self::from_registry(OperatorRegistry::with_builtins())
    }

    /// Start with no operators at all.
    pub fn empty() -> Self {
        Self::from_registry(OperatorRegistry::new())
    }

    fn from_registry(registry: OperatorRegistry) -> Self {
        EvaluatorBuilder {
            registry,
            error: None,
        }
    }

    /// Add an operator.
    #[must_use]
    pub fn operator(mut self, symbol: &str, operation: Operation) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.registry.register(symbol, operation) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Add a one-argument operator.
    #[must_use]
    pub fn unary(self, symbol: &str, apply: UnaryFn) -> Self {
        self.operator(symbol, Operation::Unary(apply))
    }

    /// Add a two-argument operator. `apply` receives `(closer, farther)`.
    #[must_use]
    pub fn binary(self, symbol: &str, apply: BinaryFn) -> Self {
        self.operator(symbol, Operation::Binary(apply))
    }

    /// Finish, or report the first registration that failed.
    pub fn build(self) -> Result<Evaluator, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Evaluator::with_registry(self.registry)),
        }
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
