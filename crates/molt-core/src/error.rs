//! Translation error type.
//!
//! The engine reports exactly one user-facing error kind: a construct with no
//! lowering strategy. Translation is fail-fast; the first unsupported
//! construct reached during the tree walk aborts the whole module with a
//! single diagnostic. Internal invariants (balanced scope frames, operator
//! table totality) are enforced with `debug_assert!` or by construction, not
//! surfaced as user errors.

use thiserror::Error;

use crate::Span;

/// Errors raised while translating a sanitized program tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The source program uses a construct the back end cannot lower.
    #[error("{message} at {span}")]
    Unsupported {
        /// Human-readable description of the offending construct.
        message: String,
        /// Source position of the offending node.
        span: Span,
    },
}

impl TranslationError {
    /// Create an unsupported-construct error at a source position.
    pub fn unsupported(message: impl Into<String>, span: Span) -> Self {
        TranslationError::Unsupported {
            message: message.into(),
            span,
        }
    }

    /// Get the source position where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            TranslationError::Unsupported { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_display() {
        let err = TranslationError::unsupported("classes are not supported", Span::new(4, 1));
        assert_eq!(format!("{}", err), "classes are not supported at 4:1");
        assert_eq!(err.span(), Span::new(4, 1));
    }
}
