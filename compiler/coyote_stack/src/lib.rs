//! Stack growth for recursive sub-scans.
//!
//! The tokenizer re-enters its own scan loop for every macro body and every
//! `{…}` section of a template string. Templates may nest inside template
//! sections without limit, so the recursion depth is controlled by the
//! input, not by the lexer.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call; the runtime owns the stack.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn scan_nested(&mut self, mode: Mode) -> Result<Vec<Token>, LexError> {
///     ensure_sufficient_stack(|| self.scan_body())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
