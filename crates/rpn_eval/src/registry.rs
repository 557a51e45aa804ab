//! Operator registry.
//!
//! Maps a symbol to its definition. A registry is filled before an evaluator
//! is built and only read afterwards: pushing an operator looks its symbol up
//! here and copies the definition onto the stack as an [`Entry`].

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::entry::{BinaryFn, Entry, UnaryFn};
use crate::errors::RegistryError;

/// Built-in operator symbols.
pub mod symbols {
    /// Multiplication (U+00D7).
    pub const MULTIPLY: &str = "×";
    /// Division (U+00F7).
    pub const DIVIDE: &str = "÷";
    /// Addition.
    pub const ADD: &str = "+";
    /// Subtraction (U+2212 MINUS SIGN, not the ASCII hyphen).
    pub const SUBTRACT: &str = "−";
    /// Square root (U+221A).
    pub const SQUARE_ROOT: &str = "√";
}

/// Number of operands an operator consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    #[inline]
    pub const fn operand_count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// The function behind an operator, tagged with its arity.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Unary(UnaryFn),
    Binary(BinaryFn),
}

impl Operation {
    #[inline]
    pub const fn arity(self) -> Arity {
        match self {
            Operation::Unary(_) => Arity::Unary,
            Operation::Binary(_) => Arity::Binary,
        }
    }
}

/// A registered operator.
#[derive(Clone, Debug)]
pub struct OperatorDef {
    symbol: Arc<str>,
    operation: Operation,
}

impl OperatorDef {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn arity(&self) -> Arity {
        self.operation.arity()
    }

    /// Build the stack entry for this operator.
    ///
    /// The symbol is shared with the registry, not copied.
    pub fn to_entry(&self) -> Entry {
        let symbol = Arc::clone(&self.symbol);
        match self.operation {
            Operation::Unary(apply) => Entry::Unary { symbol, apply },
            Operation::Binary(apply) => Entry::Binary { symbol, apply },
        }
    }
}

fn multiply(closer: f64, farther: f64) -> f64 {
    farther * closer
}

fn divide(closer: f64, farther: f64) -> f64 {
    farther / closer
}

fn add(closer: f64, farther: f64) -> f64 {
    farther + closer
}

fn subtract(closer: f64, farther: f64) -> f64 {
    farther - closer
}

const BUILTINS: [(&str, Operation); 5] = [
    (symbols::MULTIPLY, Operation::Binary(multiply)),
    (symbols::DIVIDE, Operation::Binary(divide)),
    (symbols::ADD, Operation::Binary(add)),
    (symbols::SUBTRACT, Operation::Binary(subtract)),
    (symbols::SQUARE_ROOT, Operation::Unary(f64::sqrt)),
];

/// Symbol → operator definition.
#[derive(Clone, Debug, Default)]
pub struct OperatorRegistry {
    operators: FxHashMap<Arc<str>, OperatorDef>,
}

impl OperatorRegistry {
    /// An empty registry. Every operator push against it is ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in operators `×`, `÷`, `+`, `−` and `√`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (symbol, operation) in BUILTINS {
            registry.insert(symbol, operation);
        }
        registry
    }

    /// Register `symbol` with the given operation.
    ///
    /// Symbols are unique; a symbol that is already present is rejected
    /// rather than replaced.
    pub fn register(&mut self, symbol: &str, operation: Operation) -> Result<(), RegistryError> {
        if symbol.trim().is_empty() {
            return Err(RegistryError::EmptySymbol);
        }
        if symbol.contains(char::is_whitespace) {
            return Err(RegistryError::WhitespaceInSymbol(symbol.to_owned()));
        }
        if symbol.parse::<f64>().is_ok() {
            return Err(RegistryError::NumericSymbol(symbol.to_owned()));
        }
        if self.operators.contains_key(symbol) {
            return Err(RegistryError::DuplicateSymbol(symbol.to_owned()));
        }
        tracing::debug!(symbol, arity = ?operation.arity(), "registered operator");
        self.insert(symbol, operation);
        Ok(())
    }

    /// Register a one-argument operator.
    pub fn register_unary(&mut self, symbol: &str, apply: UnaryFn) -> Result<(), RegistryError> {
        self.register(symbol, Operation::Unary(apply))
    }

    /// Register a two-argument operator. `apply` receives `(closer, farther)`.
    pub fn register_binary(&mut self, symbol: &str, apply: BinaryFn) -> Result<(), RegistryError> {
        self.register(symbol, Operation::Binary(apply))
    }

    fn insert(&mut self, symbol: &str, operation: Operation) {
        let symbol: Arc<str> = Arc::from(symbol);
        self.operators
            .insert(Arc::clone(&symbol), OperatorDef { symbol, operation });
    }

    #[inline]
    pub fn lookup(&self, symbol: &str) -> Option<&OperatorDef> {
        self.operators.get(symbol)
    }

    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// All definitions, sorted by symbol.
    pub fn definitions(&self) -> Vec<&OperatorDef> {
        let mut defs: Vec<_> = self.operators.values().collect();
        defs.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        defs
    }

    /// All symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        self.definitions()
            .into_iter()
            .map(OperatorDef::symbol)
            .collect()
    }
}
