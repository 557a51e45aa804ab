//! RPN Eval - reverse-Polish-notation evaluator engine.
//!
//! Operands and operator symbols are pushed one at a time; after every push
//! the whole stack is reduced from the top down and the value (if the stack
//! forms a complete expression) is returned.
//!
//! # Architecture
//!
//! - [`Entry`]: one stack element, an operand or an operator carrying its
//!   function pointer
//! - [`OperatorRegistry`]: symbol → operator, filled before evaluation
//! - [`reduce`]: the reduction algorithm, over borrowed slices
//! - [`Evaluator`]: registry + stack, the push/evaluate API
//! - [`EvaluatorBuilder`]: registers extra operators before first use
//! - [`SharedEvaluator`]: `Arc<Mutex>` handle for multi-threaded drivers
//!
//! # Failure model
//!
//! Evaluation never errors. An empty stack, an operator without enough
//! operands, or an unknown symbol all end in `None` (or, for the unknown
//! symbol, in an unchanged stack). Domain errors such as `√` of a negative
//! number or division by zero produce NaN and infinities as IEEE-754 says.
//! Only registering operators can fail, with [`RegistryError`].

mod builder;
mod entry;
mod errors;
mod evaluator;
mod reduce;
mod registry;
mod shared;
mod stack;

pub use builder::EvaluatorBuilder;
pub use entry::{BinaryFn, Entry, UnaryFn};
pub use errors::RegistryError;
pub use evaluator::Evaluator;
pub use reduce::{reduce, Reduction};
pub use registry::{symbols, Arity, Operation, OperatorDef, OperatorRegistry};
pub use shared::SharedEvaluator;
pub use stack::ensure_sufficient_stack;
