//! Core vocabulary shared by the molt translation pipeline.
//!
//! This crate defines the data the engine consumes and the contracts of its
//! external collaborators:
//!
//! - [`ast`]: the sanitized program tree produced by the front end
//! - [`Span`]: source positions for diagnostics
//! - [`TranslationError`]: the single user-facing error kind
//! - [`TypeOracle`] / [`TypeLabel`]: the type inference contract

pub mod ast;
mod error;
mod span;
mod types;

pub use ast::NodeId;
pub use error::TranslationError;
pub use span::Span;
pub use types::{TypeLabel, TypeOracle, TypeTable};
