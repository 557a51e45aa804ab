//! Thread-safe shared evaluator.
//!
//! [`Evaluator`] has no interior synchronization. `SharedEvaluator` puts one
//! behind `Arc<Mutex>` so several threads (or request handlers) can drive
//! the same stack. Each call takes the lock for exactly that call.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::evaluator::Evaluator;

/// A cloneable handle to one evaluator. Clones share the stack.
#[derive(Default)]
pub struct SharedEvaluator(Arc<Mutex<Evaluator>>);

impl SharedEvaluator {
    pub fn new(evaluator: Evaluator) -> Self {
        SharedEvaluator(Arc::new(Mutex::new(evaluator)))
    }

    pub fn push_operand(&self, value: f64) -> Option<f64> {
        self.0.lock().push_operand(value)
    }

    pub fn push_operator(&self, symbol: &str) -> Option<f64> {
        self.0.lock().push_operator(symbol)
    }

    pub fn evaluate(&self) -> Option<f64> {
        self.0.lock().evaluate()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Run `f` with the evaluator locked, e.g. to push several entries
    /// without another thread interleaving.
    pub fn with<R>(&self, f: impl FnOnce(&mut Evaluator) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl Clone for SharedEvaluator {
    fn clone(&self) -> Self {
        SharedEvaluator(Arc::clone(&self.0))
    }
}

impl From<Evaluator> for SharedEvaluator {
    fn from(evaluator: Evaluator) -> Self {
        Self::new(evaluator)
    }
}

/// Never blocks: a handle whose evaluator is locked (including by the
/// formatting thread itself, inside [`with`](SharedEvaluator::with)) prints
/// `<locked>`.
impl fmt::Debug for SharedEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_lock() {
            Some(calc) => write!(f, "SharedEvaluator({:?})", &*calc),
            None => f.write_str("SharedEvaluator(<locked>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn clones_share_the_stack() {
        let a = SharedEvaluator::default();
        let b = a.clone();

        a.push_operand(2.0);
        assert_eq!(b.push_operand(3.0), Some(3.0));
        assert_eq!(a.push_operator("×"), Some(6.0));
        assert_eq!(b.len(), 3);

        b.clear();
        assert!(a.is_empty());
        assert_eq!(a.evaluate(), None);
    }

    #[test]
    fn debug_inside_with_does_not_block() {
        let shared = SharedEvaluator::default();
        let unlocked = format!("{shared:?}");
        assert!(unlocked.starts_with("SharedEvaluator(Evaluator"));

        let inner = shared.with(|calc| {
            calc.push_operand(1.0);
            format!("{shared:?}")
        });
        assert_eq!(inner, "SharedEvaluator(<locked>)");
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn concurrent_pushes_are_all_recorded() {
        let shared = SharedEvaluator::new(Evaluator::new());
        shared.push_operand(0.0);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.with(|calc| {
                            calc.push_operand(1.0);
                            calc.push_operator("+");
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok());
        }

        assert_eq!(shared.len(), 1 + 8 * 100 * 2);
        assert_eq!(shared.evaluate(), Some(800.0));
    }
}
