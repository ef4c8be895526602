//! The type oracle contract.
//!
//! Type inference runs before the translation engine and attaches a
//! [`TypeLabel`] to every program node. The engine never computes, caches,
//! or mutates type information; it only queries the oracle for:
//!
//! - the overall return type of each function definition,
//! - every right-hand assignment value,
//! - every local variable at function-entry declaration time.
//!
//! Keeping the oracle a pure function from node identity to label lets a
//! different inference engine be substituted without touching the translator.

use rustc_hash::FxHashMap;

use crate::ast::NodeId;

/// A type label attached to a program node.
///
/// Either a concrete target-type spelling (`long`, `sequence<long>`, ...) or
/// the auto-deduced sentinel meaning "let the target language's generic
/// instantiation determine this type". The sentinel still carries a spelling
/// so it can be emitted verbatim where a declaration is unavoidable (the
/// nested `return_type` alias).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLabel {
    spelling: String,
    deduced: bool,
}

impl TypeLabel {
    /// A concrete target-type spelling.
    pub fn concrete(spelling: impl Into<String>) -> Self {
        Self {
            spelling: spelling.into(),
            deduced: false,
        }
    }

    /// The auto-deduced sentinel, carrying the inference engine's best
    /// spelling for contexts that must still print something.
    pub fn deduced(spelling: impl Into<String>) -> Self {
        Self {
            spelling: spelling.into(),
            deduced: true,
        }
    }

    /// Whether this label is the auto-deduced sentinel.
    pub fn is_deduced(&self) -> bool {
        self.deduced
    }

    /// The target-language spelling of this label.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }
}

/// Maps program nodes to their inferred type labels.
///
/// Implementations must be pure: the same node always yields the same label
/// for the duration of one translation.
pub trait TypeOracle {
    /// The type label of a node.
    fn type_of(&self, node: NodeId) -> TypeLabel;
}

/// A map-backed [`TypeOracle`], filled in by the inference component.
///
/// Nodes absent from the table read as the auto-deduced sentinel.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    labels: FxHashMap<NodeId, TypeLabel>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the label of a node.
    pub fn insert(&mut self, node: NodeId, label: TypeLabel) {
        self.labels.insert(node, label);
    }
}

impl TypeOracle for TypeTable {
    fn type_of(&self, node: NodeId) -> TypeLabel {
        self.labels
            .get(&node)
            .cloned()
            .unwrap_or_else(|| TypeLabel::deduced("auto"))
    }
}
