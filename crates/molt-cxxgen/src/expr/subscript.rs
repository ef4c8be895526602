//! Subscript and slice translation.
//!
//! Tuple element access needs a compile-time index in the target language's
//! type system, while sequence indexing does not. A subscript whose index is
//! a compile-time-constant integer therefore lowers to `std::get<N>(value)`;
//! anything else lowers to runtime indexing.

use molt_core::ast::{Expr, ExprKind};
use molt_core::{Span, TranslationError};

use super::{ExprTranslator, Result};

/// Upper bound substituted when a slice has a step but no explicit end.
const MAX_BOUND: &str = "std::numeric_limits<long>::max()";

pub(super) fn translate_subscript(
    tr: &ExprTranslator<'_, '_>,
    value: &Expr,
    index: &Expr,
) -> Result<String> {
    let value = tr.translate(value)?;
    if let Some(n) = constant_index(index) {
        return Ok(format!("std::get<{n}>({value})"));
    }
    let index = tr.translate(index)?;
    Ok(format!("{value}[{index}]"))
}

/// The compile-time value of a constant subscript index.
///
/// Only non-negative integer literals qualify: a negative index has
/// wraparound semantics the runtime indexing path must handle, and
/// `std::get` would reject it anyway.
fn constant_index(index: &Expr) -> Option<u64> {
    match &index.kind {
        ExprKind::Index(inner) => constant_index(inner),
        ExprKind::Num(repr) => repr.parse::<u64>().ok(),
        _ => None,
    }
}

/// Translate a slice into a `slice(...)` constructor call.
///
/// Defaulting rules: a step with neither bound is unsupported; a step with
/// no upper bound defaults the upper bound to the maximum representable
/// integer; an upper bound (given or defaulted) with no lower bound defaults
/// the lower bound to zero. Only the bounds defined after defaulting are
/// passed, in lower/upper/step order.
pub(super) fn translate_slice(
    tr: &ExprTranslator<'_, '_>,
    lower: Option<&Expr>,
    upper: Option<&Expr>,
    step: Option<&Expr>,
    span: Span,
) -> Result<String> {
    let mut lower = lower.map(|e| tr.translate(e)).transpose()?;
    let mut upper = upper.map(|e| tr.translate(e)).transpose()?;
    let step = step.map(|e| tr.translate(e)).transpose()?;

    if lower.is_none() && upper.is_none() && step.is_some() {
        return Err(TranslationError::unsupported(
            "slicing with a step but no bounds",
            span,
        ));
    }
    if step.is_some() && upper.is_none() {
        upper = Some(MAX_BOUND.to_string());
    }
    if upper.is_some() && lower.is_none() {
        lower = Some("0".to_string());
    }

    let bounds: Vec<String> = [lower, upper, step].into_iter().flatten().collect();
    Ok(format!("slice({})", bounds.join(", ")))
}
