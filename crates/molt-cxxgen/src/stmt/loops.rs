//! Loop translation, including the `else` clause approximation.
//!
//! The source language runs a loop's `else` block only when the loop
//! finishes without `break`. The lowering here guards on initial truthiness
//! instead: the `else` branch runs only when the loop would never be
//! entered. A `break` inside the body does not suppress the `else` branch —
//! a known, deliberate approximation.

use molt_core::TranslationError;
use molt_core::ast::{Expr, ExprKind, Stmt};

use super::{Result, StmtTranslator};
use crate::cxx::CxxStmt;

/// Translate a for-loop over an iterable.
///
/// The loop target must be a simple identifier. With an `else` clause the
/// loop is wrapped as `if (iter) { loop } else { elseBlock }`.
pub(super) fn translate_for(
    tr: &mut StmtTranslator<'_, '_>,
    target: &Expr,
    iter: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
) -> Result<CxxStmt> {
    if !matches!(target.kind, ExprKind::Name(_)) {
        return Err(TranslationError::unsupported(
            "using something other than an identifier as loop target",
            target.span,
        ));
    }

    let iter = tr.expr().translate(iter)?;
    let target = tr.expr().translate(target)?;
    let body = tr.translate_block(body)?;

    let loop_stmt = CxxStmt::RangeFor {
        target,
        iter: iter.clone(),
        body,
    };
    if orelse.is_empty() {
        return Ok(loop_stmt);
    }
    let orelse = tr.translate_block(orelse)?;
    Ok(CxxStmt::If {
        test: iter,
        then: vec![loop_stmt],
        orelse: Some(orelse),
    })
}

/// Translate a while-loop.
///
/// With an `else` clause the loop is lowered as
/// `if (test) { body; while (test) { body } } else { elseBlock }`, entering
/// the loop (and skipping the `else`) only when the test is initially true.
pub(super) fn translate_while(
    tr: &mut StmtTranslator<'_, '_>,
    test: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
) -> Result<CxxStmt> {
    let test = tr.expr().translate(test)?;
    let body = tr.translate_block(body)?;

    let loop_stmt = CxxStmt::While {
        test: test.clone(),
        body: body.clone(),
    };
    if orelse.is_empty() {
        return Ok(loop_stmt);
    }
    let orelse = tr.translate_block(orelse)?;
    let mut then = body;
    then.push(loop_stmt);
    Ok(CxxStmt::If {
        test,
        then,
        orelse: Some(orelse),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use molt_core::ast::{NodeId, StmtKind};
    use molt_core::{Span, TypeTable};
    use molt_registry::ModuleRegistry;
    use rustc_hash::FxHashSet;

    use crate::context::TranslationContext;

    fn name(s: &str) -> Expr {
        Expr::new(NodeId(0), Span::default(), ExprKind::Name(s.into()))
    }

    fn num(s: &str) -> Expr {
        Expr::new(NodeId(0), Span::default(), ExprKind::Num(s.into()))
    }

    fn stmt(kind: StmtKind) -> Stmt {
        Stmt::new(NodeId(0), Span::default(), kind)
    }

    fn translate(kind: StmtKind) -> Result<CxxStmt> {
        let oracle = TypeTable::new();
        let registry = ModuleRegistry::with_default_modules();
        let mut ctx = TranslationContext::new(&oracle, &registry, FxHashSet::default());
        ctx.scopes.enter_function(["r", "i", "x"], []);
        StmtTranslator::new(&mut ctx).translate(&stmt(kind))
    }

    #[test]
    fn bare_for_has_no_guard() {
        let out = translate(StmtKind::For {
            target: name("i"),
            iter: name("r"),
            body: vec![stmt(StmtKind::Pass)],
            orelse: vec![],
        })
        .unwrap();
        assert_eq!(
            out,
            CxxStmt::RangeFor {
                target: "i".into(),
                iter: "r".into(),
                body: vec![CxxStmt::Empty],
            }
        );
    }

    #[test]
    fn for_with_else_guards_on_the_iterable() {
        let out = translate(StmtKind::For {
            target: name("i"),
            iter: name("r"),
            body: vec![stmt(StmtKind::Pass)],
            orelse: vec![stmt(StmtKind::Print {
                dest: None,
                values: vec![num("0")],
                newline: true,
            })],
        })
        .unwrap();
        assert_eq!(
            out,
            CxxStmt::If {
                test: "r".into(),
                then: vec![CxxStmt::RangeFor {
                    target: "i".into(),
                    iter: "r".into(),
                    body: vec![CxxStmt::Empty],
                }],
                orelse: Some(vec![CxxStmt::Line("print(0)".into())]),
            }
        );
    }

    #[test]
    fn for_with_non_identifier_target_fails() {
        let out = translate(StmtKind::For {
            target: Expr::new(
                NodeId(0),
                Span::default(),
                ExprKind::Tuple(vec![name("i"), name("j")]),
            ),
            iter: name("r"),
            body: vec![stmt(StmtKind::Pass)],
            orelse: vec![],
        });
        assert!(out.is_err());
    }

    #[test]
    fn bare_while() {
        let out = translate(StmtKind::While {
            test: name("x"),
            body: vec![stmt(StmtKind::Break)],
            orelse: vec![],
        })
        .unwrap();
        assert_eq!(
            out,
            CxxStmt::While {
                test: "x".into(),
                body: vec![CxxStmt::Line("break".into())],
            }
        );
    }

    #[test]
    fn while_with_else_unrolls_first_iteration() {
        let out = translate(StmtKind::While {
            test: name("x"),
            body: vec![stmt(StmtKind::Pass)],
            orelse: vec![stmt(StmtKind::Pass)],
        })
        .unwrap();
        assert_eq!(
            out,
            CxxStmt::If {
                test: "x".into(),
                then: vec![
                    CxxStmt::Empty,
                    CxxStmt::While {
                        test: "x".into(),
                        body: vec![CxxStmt::Empty],
                    },
                ],
                orelse: Some(vec![CxxStmt::Empty]),
            }
        );
    }
}
