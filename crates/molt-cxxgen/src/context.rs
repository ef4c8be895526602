//! Translation context threaded through the walk.
//!
//! All mutable engine state lives here: the scope stack, the
//! local-function set, and the append-only declaration/definition
//! accumulators. Keeping it one explicit object (rather than ambient
//! globals) keeps the engine re-entrant and testable per function.

use rustc_hash::FxHashSet;

use molt_core::TypeOracle;
use molt_registry::ModuleRegistry;

use crate::cxx::CxxDecl;
use crate::scope::ScopeStack;

/// State for translating one module.
pub struct TranslationContext<'a> {
    oracle: &'a dyn TypeOracle,
    registry: &'a ModuleRegistry,
    /// Names of all top-level function definitions in the module.
    globals: FxHashSet<String>,
    /// Proxy-imported names visible in the current function.
    local_functions: FxHashSet<String>,
    /// One frame per function being translated.
    pub(crate) scopes: ScopeStack,
    declarations: Vec<CxxDecl>,
    definitions: Vec<CxxDecl>,
}

impl<'a> TranslationContext<'a> {
    pub fn new(
        oracle: &'a dyn TypeOracle,
        registry: &'a ModuleRegistry,
        globals: FxHashSet<String>,
    ) -> Self {
        Self {
            oracle,
            registry,
            globals,
            local_functions: FxHashSet::default(),
            scopes: ScopeStack::new(),
            declarations: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub fn oracle(&self) -> &dyn TypeOracle {
        self.oracle
    }

    pub fn registry(&self) -> &ModuleRegistry {
        self.registry
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// Whether `name` is a top-level function of the module.
    pub fn is_global_function(&self, name: &str) -> bool {
        self.globals.contains(name)
    }

    /// Whether `name` was proxy-imported into the current function.
    pub fn is_local_function(&self, name: &str) -> bool {
        self.local_functions.contains(name)
    }

    /// Record a proxy-imported name.
    pub fn add_local_function(&mut self, name: impl Into<String>) {
        self.local_functions.insert(name.into());
    }

    /// Snapshot the local-function set before translating a function body.
    pub fn snapshot_local_functions(&self) -> FxHashSet<String> {
        self.local_functions.clone()
    }

    /// Restore a snapshot once the function's translation finishes, so
    /// imports inside the body do not outlive it.
    pub fn restore_local_functions(&mut self, snapshot: FxHashSet<String>) {
        self.local_functions = snapshot;
    }

    /// Append a generic struct skeleton to the declarations list.
    pub fn push_declaration(&mut self, decl: CxxDecl) {
        self.declarations.push(decl);
    }

    /// Append an out-of-line call-operator definition.
    pub fn push_definition(&mut self, decl: CxxDecl) {
        self.definitions.push(decl);
    }

    /// Consume the context, yielding the accumulated declarations and
    /// definitions in encounter order.
    pub fn into_output(self) -> (Vec<CxxDecl>, Vec<CxxDecl>) {
        (self.declarations, self.definitions)
    }
}
