//! Stack growth for deep reductions.
//!
//! Reduction recurses once per consumed entry, so a stack with a long run of
//! pending operators recurses as deep as the stack is long. Every recursive
//! step goes through [`ensure_sufficient_stack`], which grows the native stack
//! with `stacker` before it runs out.
//!
//! On `wasm32` there is no `stacker`; the closure is called directly.

/// Headroom that must remain before a reduction step runs (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
