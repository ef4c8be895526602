//! Scope resolution for function translation.
//!
//! [`ScopeStack`] tracks one frame per function-nesting level; a frame is
//! the set of names local to the function currently being translated
//! (formal parameters plus every name assigned anywhere in the body).
//!
//! Only the top frame is ever consulted: the sanitization passes guarantee
//! no free nested-function closures reach the engine, so there is no
//! lexical parent chain to walk. An inner function that survives
//! sanitization as a plain top-level function gets the global-function
//! treatment instead.

use rustc_hash::FxHashSet;

/// A stack of per-function name sets.
///
/// Push/pop is strictly balanced: one `enter_function` and one
/// `exit_function` per function translation, including error paths.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<FxHashSet<String>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a frame holding the union of the formals and the locally
    /// assigned names.
    pub fn enter_function<'n>(
        &mut self,
        formals: impl IntoIterator<Item = &'n str>,
        assigned: impl IntoIterator<Item = &'n str>,
    ) {
        let mut frame: FxHashSet<String> = formals.into_iter().map(str::to_owned).collect();
        frame.extend(assigned.into_iter().map(str::to_owned));
        self.frames.push(frame);
    }

    /// Pop the current function's frame.
    pub fn exit_function(&mut self) {
        debug_assert!(!self.frames.is_empty(), "unbalanced scope pop");
        self.frames.pop();
    }

    /// Whether `name` is local to the function currently being translated.
    ///
    /// Consults the top frame only.
    pub fn is_local(&self, name: &str) -> bool {
        self.frames.last().is_some_and(|frame| frame.contains(name))
    }

    /// Whether no function is currently being translated.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
