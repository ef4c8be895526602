//! molt — an ahead-of-time translator back end for a statically-inferable
//! Python-like subset, emitting generic, template-specialized C++.
//!
//! ## Architecture
//!
//! - **molt-core**: the sanitized program tree, source spans, the
//!   translation error, and the type-oracle contract
//! - **molt-registry**: static operator and module registries
//! - **molt-cxxgen**: the tree-walking translation engine
//!
//! The parser, the sanitization passes (comprehension/nested-function/
//! lambda removal), and the type inference engine are external
//! collaborators: this crate consumes their output.
//!
//! ## Example
//!
//! ```
//! use molt::ast::{Expr, ExprKind, FunctionDef, NodeId, Program, Stmt, StmtKind};
//! use molt::{Span, Translator, TypeLabel, TypeTable};
//!
//! // def f(x): return x
//! let body = vec![Stmt::new(
//!     NodeId(2),
//!     Span::new(1, 11),
//!     StmtKind::Return(Some(Expr::new(
//!         NodeId(3),
//!         Span::new(1, 18),
//!         ExprKind::Name("x".into()),
//!     ))),
//! )];
//! let program = Program::module(vec![Stmt::new(
//!     NodeId(1),
//!     Span::new(1, 1),
//!     StmtKind::FunctionDef(FunctionDef {
//!         name: "f".into(),
//!         args: vec!["x".into()],
//!         body,
//!     }),
//! )]);
//!
//! let mut oracle = TypeTable::new();
//! oracle.insert(NodeId(1), TypeLabel::deduced("argument_type0"));
//!
//! let source = Translator::with_default_modules()
//!     .translate("identity", &program, &oracle)
//!     .unwrap();
//! assert!(source.contains("namespace identity {"));
//! assert!(source.contains("struct f {"));
//! ```

pub use molt_core::ast;
pub use molt_core::{NodeId, Span, TranslationError, TypeLabel, TypeOracle, TypeTable};
pub use molt_cxxgen::{
    CxxDecl, CxxStmt, RUNTIME_HEADERS, TranslationUnit, translate_module,
};
pub use molt_registry::{BUILTINS_MODULE, ModuleRegistry, ModuleSymbols, operators};

/// High-level entry point bundling a module registry with the translation
/// walk.
pub struct Translator {
    registry: ModuleRegistry,
}

impl Translator {
    /// A translator over the default runtime surface.
    pub fn with_default_modules() -> Self {
        Self {
            registry: ModuleRegistry::with_default_modules(),
        }
    }

    /// A translator over a caller-built registry.
    pub fn with_registry(registry: ModuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Translate a sanitized module and render it as C++ source text.
    pub fn translate(
        &self,
        module_name: &str,
        program: &ast::Program,
        oracle: &dyn TypeOracle,
    ) -> Result<String, TranslationError> {
        let unit = translate_module(module_name, program, oracle, &self.registry)?;
        Ok(unit.to_source())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::with_default_modules()
    }
}
