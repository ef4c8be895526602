//! Assignment and augmented-assignment translation.

use molt_core::ast::{BinaryOp, Expr, ExprKind};
use molt_core::{Span, TranslationError};
use molt_registry::operators;

use super::{Result, StmtTranslator};
use crate::cxx::CxxStmt;

/// Translate `a = b = value`.
///
/// Every target must be a simple identifier or a subscript. When the type
/// oracle marks the right-hand side auto-deduced the statement declares its
/// targets with `auto`; otherwise it assigns to already-declared bindings
/// (the function lowering emitted their declarations up front).
pub(super) fn translate_assign(
    tr: &mut StmtTranslator<'_, '_>,
    targets: &[Expr],
    value: &Expr,
    span: Span,
) -> Result<CxxStmt> {
    if !targets
        .iter()
        .all(|t| matches!(t.kind, ExprKind::Name(_) | ExprKind::Subscript { .. }))
    {
        return Err(TranslationError::unsupported(
            "assigning to something other than an identifier or a subscript",
            span,
        ));
    }

    let deduced = tr.ctx_mut().oracle().type_of(value.id).is_deduced();
    let value = tr.expr().translate(value)?;
    let targets = targets
        .iter()
        .map(|t| tr.expr().translate(t))
        .collect::<Result<Vec<_>>>()?
        .join(" = ");

    if deduced {
        Ok(CxxStmt::Line(format!("auto {targets} = {value}")))
    } else {
        Ok(CxxStmt::Line(format!("{targets} = {value}")))
    }
}

/// Translate `target OP= value` as `target = target OP value`.
///
/// Routing through the same operator builder as binary expressions keeps the
/// semantics uniform with the operator table; no native compound-assignment
/// operator is ever emitted.
pub(super) fn translate_aug_assign(
    tr: &mut StmtTranslator<'_, '_>,
    target: &Expr,
    op: BinaryOp,
    value: &Expr,
) -> Result<CxxStmt> {
    if !matches!(target.kind, ExprKind::Name(_)) {
        return Err(TranslationError::unsupported(
            "assigning to something other than an identifier",
            target.span,
        ));
    }

    let target = tr.expr().translate(target)?;
    let value = tr.expr().translate(value)?;
    let combined = operators::binary(op, &target, &value);
    Ok(CxxStmt::Line(format!("{target} = {combined}")))
}
