//! Static operator and module registries for the molt back end.
//!
//! The translation engine consults these tables read-only:
//!
//! - [`operators`]: operator-kind → target-expression builders
//! - [`ModuleRegistry`]: module → symbol → native-or-proxy flags, plus the
//!   built-ins set

mod modules;
pub mod operators;

pub use modules::{BUILTINS_MODULE, ModuleRegistry, ModuleSymbols};
