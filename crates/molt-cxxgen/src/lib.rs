//! molt C++ code generation back end.
//!
//! A tree-walking translation engine that turns a sanitized, type-annotated
//! program tree into generic, compile-time-specialized C++ function objects.
//!
//! ## Modules
//!
//! - [`collect`]: name-collection passes (global functions, assigned locals)
//! - [`context`]: translation context threaded through the walk
//! - [`cxx`]: abstract C++ output nodes and their rendering
//! - [`expr`]: expression translator
//! - [`function`]: function-to-generic-struct lowering
//! - [`module`]: module assembler and translation entry point
//! - [`scope`]: per-function scope frames for name resolution
//! - [`stmt`]: statement translator

pub mod collect;
pub mod context;
pub mod cxx;
pub mod expr;
pub mod function;
pub mod module;
pub mod scope;
pub mod stmt;

pub use context::TranslationContext;
pub use cxx::{CxxDecl, CxxStmt, FunctionSignature, NamespaceBlock, Param, TranslationUnit};
pub use expr::ExprTranslator;
pub use module::{RUNTIME_HEADERS, translate_module};
pub use scope::ScopeStack;
pub use stmt::StmtTranslator;

// Re-export the error type from core for convenience.
pub use molt_core::TranslationError;
