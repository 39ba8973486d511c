//! Stack growth for deep recursive descent.
//!
//! With the `stack-growth` feature on native targets, each descent through
//! a recursive rule checks the remaining stack and switches to a freshly
//! allocated segment when it runs low. This only makes deep finite
//! recursion survivable; it does not bound recursion depth.

/// Run `f`, growing the stack first if less than a red zone remains.
#[inline]
#[cfg(all(feature = "stack-growth", not(target_arch = "wasm32")))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow when less than this much stack remains (100KB).
    const RED_ZONE: usize = 100 * 1024;
    /// Size of each newly allocated segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Passthrough when stack growth is unavailable or disabled.
#[inline]
#[cfg(not(all(feature = "stack-growth", not(target_arch = "wasm32"))))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
