//! List and tuple literal translation.

use molt_core::ast::Expr;

use super::{ExprTranslator, Result};

/// Translate a list literal.
///
/// An empty list lowers to the runtime's empty sequence constructor. A
/// non-empty list deduces its element type as the type of the sum of all
/// elements, which lets the target compiler unify the element types of a
/// heterogeneous-looking literal through its usual promotion rules.
pub(super) fn translate_list(tr: &ExprTranslator<'_, '_>, elts: &[Expr]) -> Result<String> {
    if elts.is_empty() {
        return Ok("list()".to_string());
    }
    let elts = elts
        .iter()
        .map(|elt| tr.translate(elt))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!(
        "sequence<decltype({})>({{ {} }})",
        elts.join(" + "),
        elts.join(", ")
    ))
}

/// Translate a tuple literal.
///
/// Tuples are naturally heterogeneous, so no deduction trick is needed;
/// arity and element order are preserved.
pub(super) fn translate_tuple(tr: &ExprTranslator<'_, '_>, elts: &[Expr]) -> Result<String> {
    let elts = elts
        .iter()
        .map(|elt| tr.translate(elt))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("std::make_tuple({})", elts.join(", ")))
}

#[cfg(test)]
mod tests {
    use molt_core::ast::{ExprKind, NodeId};
    use molt_core::{Span, TypeTable};
    use molt_registry::ModuleRegistry;
    use rustc_hash::FxHashSet;

    use crate::context::TranslationContext;
    use crate::expr::ExprTranslator;

    fn num(s: &str) -> molt_core::ast::Expr {
        molt_core::ast::Expr::new(NodeId(0), Span::default(), ExprKind::Num(s.into()))
    }

    fn translate(kind: ExprKind) -> String {
        let oracle = TypeTable::new();
        let registry = ModuleRegistry::with_default_modules();
        let ctx = TranslationContext::new(&oracle, &registry, FxHashSet::default());
        let e = molt_core::ast::Expr::new(NodeId(0), Span::default(), kind);
        ExprTranslator::new(&ctx).translate(&e).unwrap()
    }

    #[test]
    fn empty_list() {
        assert_eq!(translate(ExprKind::List(vec![])), "list()");
    }

    #[test]
    fn list_uses_sum_trick_without_altering_elements() {
        let text = translate(ExprKind::List(vec![num("1"), num("2"), num("3")]));
        assert_eq!(text, "sequence<decltype(1 + 2 + 3)>({ 1, 2, 3 })");
    }

    #[test]
    fn empty_tuple() {
        assert_eq!(translate(ExprKind::Tuple(vec![])), "std::make_tuple()");
    }

    #[test]
    fn tuple_preserves_arity_and_order() {
        let text = translate(ExprKind::Tuple(vec![num("1"), num("2")]));
        assert_eq!(text, "std::make_tuple(1, 2)");
    }
}
