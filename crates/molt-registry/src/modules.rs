//! Module registry: importable modules and the built-ins set.
//!
//! The registry maps module names to symbol tables, and each symbol to a
//! flag saying whether the target runtime can call it directly (*native*) or
//! whether calls must be routed through a `proxy::` wrapper implementation.
//!
//! The special `__builtins__` module doubles as the built-ins set consulted
//! by identifier resolution.
//!
//! # Registration
//!
//! The registry is populated once, before translation starts, and is
//! consulted read-only by the import handler and by name resolution.
//! Callers with their own runtime surface can build a registry from scratch
//! with [`ModuleRegistry::new`] and [`ModuleRegistry::register_module`].

use rustc_hash::FxHashMap;

/// Name of the pseudo-module holding the built-ins set.
pub const BUILTINS_MODULE: &str = "__builtins__";

// ============================================================================
// ModuleSymbols
// ============================================================================

/// The symbol table of one registered module.
#[derive(Debug, Clone, Default)]
pub struct ModuleSymbols {
    symbols: FxHashMap<String, bool>,
}

impl ModuleSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol; `is_native` says the runtime can call it directly.
    pub fn insert(&mut self, name: impl Into<String>, is_native: bool) {
        self.symbols.insert(name.into(), is_native);
    }

    /// Whether the module exports `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// The native flag of `name`, or `None` if the module does not export it.
    pub fn is_native(&self, name: &str) -> Option<bool> {
        self.symbols.get(name).copied()
    }
}

impl<S: Into<String>, const N: usize> From<[(S, bool); N]> for ModuleSymbols {
    fn from(entries: [(S, bool); N]) -> Self {
        let mut table = Self::new();
        for (name, is_native) in entries {
            table.insert(name, is_native);
        }
        table
    }
}

// ============================================================================
// ModuleRegistry
// ============================================================================

/// Static table of importable modules, keyed by module name.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: FxHashMap<String, ModuleSymbols>,
}

impl ModuleRegistry {
    /// An empty registry with no modules, not even built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the default runtime surface.
    pub fn with_default_modules() -> Self {
        let mut registry = Self::new();

        // Built-ins all go through proxy wrappers: they are function objects
        // in the runtime, not plain functions.
        let mut builtins = ModuleSymbols::new();
        for name in [
            "abs", "all", "any", "bool", "enumerate", "filter", "len", "map", "max", "min",
            "range", "reduce", "reversed", "sorted", "sum", "xrange", "zip",
        ] {
            builtins.insert(name, false);
        }
        registry.register_module(BUILTINS_MODULE, builtins);

        registry.register_module(
            "math",
            ModuleSymbols::from([
                ("ceil", true),
                ("cos", true),
                ("exp", true),
                ("fabs", true),
                ("floor", true),
                ("log", true),
                ("pow", true),
                ("sin", true),
                ("sqrt", true),
                ("tan", true),
            ]),
        );

        registry.register_module(
            "random",
            ModuleSymbols::from([("random", false), ("seed", false)]),
        );

        registry
    }

    /// Register (or replace) a module's symbol table.
    pub fn register_module(&mut self, name: impl Into<String>, symbols: ModuleSymbols) {
        self.modules.insert(name.into(), symbols);
    }

    /// Look up a module's symbol table.
    pub fn lookup(&self, module: &str) -> Option<&ModuleSymbols> {
        self.modules.get(module)
    }

    /// Whether `name` is a built-in.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.modules
            .get(BUILTINS_MODULE)
            .is_some_and(|builtins| builtins.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builtins_present() {
        let registry = ModuleRegistry::with_default_modules();
        assert!(registry.is_builtin("map"));
        assert!(registry.is_builtin("len"));
        assert!(!registry.is_builtin("cos"));
    }

    #[test]
    fn native_flags() {
        let registry = ModuleRegistry::with_default_modules();
        let math = registry.lookup("math").unwrap();
        assert_eq!(math.is_native("cos"), Some(true));
        assert_eq!(math.is_native("nope"), None);

        let random = registry.lookup("random").unwrap();
        assert_eq!(random.is_native("seed"), Some(false));
    }

    #[test]
    fn unknown_module() {
        let registry = ModuleRegistry::with_default_modules();
        assert!(registry.lookup("os").is_none());
    }

    #[test]
    fn custom_registration() {
        let mut registry = ModuleRegistry::new();
        registry.register_module("mymod", ModuleSymbols::from([("f", false)]));

        assert!(!registry.is_builtin("f"));
        assert_eq!(registry.lookup("mymod").unwrap().is_native("f"), Some(false));
    }
}
