//! Expression translation.
//!
//! The [`ExprTranslator`] converts expression nodes into target-expression
//! fragments (plain strings), recursing into sub-expressions and delegating
//! operator spellings to the registry:
//!
//! - boolean combinations left-fold the boolean builder
//! - chained comparisons expand pairwise, joined with conjunction
//! - literals, identifier resolution, and subscripts/slices live in the
//!   submodules
//!
//! Expression translation never mutates engine state; it reads the scope
//! stack, the registries, and the global/local-function sets.

mod identifiers;
mod literals;
mod subscript;

use molt_core::TranslationError;
use molt_core::ast::{Expr, ExprKind};
use molt_registry::operators;

use crate::context::TranslationContext;

type Result<T> = std::result::Result<T, TranslationError>;

/// Translates expression nodes into target-expression fragments.
pub struct ExprTranslator<'a, 'ctx> {
    ctx: &'a TranslationContext<'ctx>,
}

impl<'a, 'ctx> ExprTranslator<'a, 'ctx> {
    pub fn new(ctx: &'a TranslationContext<'ctx>) -> Self {
        Self { ctx }
    }

    pub(crate) fn ctx(&self) -> &TranslationContext<'ctx> {
        self.ctx
    }

    /// Translate an expression into a target fragment.
    pub fn translate(&self, expr: &Expr) -> Result<String> {
        match &expr.kind {
            ExprKind::BoolCombination { op, values } => {
                let mut parts = values
                    .iter()
                    .map(|value| self.translate(value))
                    .collect::<Result<Vec<_>>>()?
                    .into_iter();
                let Some(first) = parts.next() else {
                    return Err(TranslationError::unsupported(
                        "boolean combination without operands",
                        expr.span,
                    ));
                };
                Ok(parts.fold(first, |acc, value| operators::boolean(*op, &acc, &value)))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.translate(left)?;
                let right = self.translate(right)?;
                Ok(operators::binary(*op, &left, &right))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.translate(operand)?;
                Ok(operators::unary(*op, &operand))
            }
            ExprKind::Conditional { test, then, orelse } => {
                let test = self.translate(test)?;
                let then = self.translate(then)?;
                let orelse = self.translate(orelse)?;
                Ok(format!("({test} ? {then} : {orelse})"))
            }
            ExprKind::List(elts) => literals::translate_list(self, elts),
            ExprKind::Tuple(elts) => literals::translate_tuple(self, elts),
            ExprKind::Compare {
                left,
                ops,
                comparators,
            } => self.translate_compare(left, ops, comparators),
            ExprKind::Call { func, args } => {
                let func = self.translate(func)?;
                let args = args
                    .iter()
                    .map(|arg| self.translate(arg))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{func}({})", args.join(", ")))
            }
            ExprKind::Num(repr) => Ok(repr.clone()),
            ExprKind::Str(value) => Ok(format!("\"{value}\"")),
            ExprKind::Subscript { value, index } => subscript::translate_subscript(self, value, index),
            ExprKind::Name(name) => identifiers::translate_name(self, name),
            ExprKind::Slice { lower, upper, step } => {
                subscript::translate_slice(self, lower.as_deref(), upper.as_deref(), step.as_deref(), expr.span)
            }
            ExprKind::Index(value) => self.translate(value),
        }
    }

    /// Expand `a OP1 b OP2 c` into `(a OP1 b) and (b OP2 c)`, preserving the
    /// source chain's left-to-right evaluation order.
    fn translate_compare(
        &self,
        left: &Expr,
        ops: &[molt_core::ast::CmpOp],
        comparators: &[Expr],
    ) -> Result<String> {
        debug_assert_eq!(ops.len(), comparators.len());
        let mut prev = self.translate(left)?;
        let mut pairs = Vec::with_capacity(ops.len());
        for (op, comparator) in ops.iter().zip(comparators) {
            let right = self.translate(comparator)?;
            pairs.push(operators::comparison(*op, &prev, &right));
            prev = right;
        }
        Ok(pairs.join(" and "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molt_core::ast::{BinaryOp, BoolOp, CmpOp, NodeId, UnaryOp};
    use molt_core::{Span, TypeTable};
    use molt_registry::ModuleRegistry;
    use rustc_hash::FxHashSet;

    fn expr(kind: ExprKind) -> Expr {
        Expr::new(NodeId(0), Span::default(), kind)
    }

    fn name(s: &str) -> Expr {
        expr(ExprKind::Name(s.into()))
    }

    fn num(s: &str) -> Expr {
        expr(ExprKind::Num(s.into()))
    }

    fn translate(e: &Expr) -> String {
        let oracle = TypeTable::new();
        let registry = ModuleRegistry::with_default_modules();
        let mut ctx = TranslationContext::new(&oracle, &registry, FxHashSet::default());
        ctx.scopes.enter_function(["a", "b", "c", "x"], []);
        ExprTranslator::new(&ctx).translate(e).unwrap()
    }

    #[test]
    fn binary_and_unary() {
        let e = expr(ExprKind::Binary {
            op: BinaryOp::Add,
            left: Box::new(name("x")),
            right: Box::new(num("1")),
        });
        assert_eq!(translate(&e), "(x + 1)");

        let e = expr(ExprKind::Unary {
            op: UnaryOp::Minus,
            operand: Box::new(name("x")),
        });
        assert_eq!(translate(&e), "(-x)");
    }

    #[test]
    fn boolean_left_fold() {
        let e = expr(ExprKind::BoolCombination {
            op: BoolOp::And,
            values: vec![name("a"), name("b"), name("c")],
        });
        assert_eq!(translate(&e), "((a and b) and c)");
    }

    #[test]
    fn chained_comparison_expands_pairwise() {
        let e = expr(ExprKind::Compare {
            left: Box::new(name("a")),
            ops: vec![CmpOp::Lt, CmpOp::LtE],
            comparators: vec![name("b"), name("c")],
        });
        assert_eq!(translate(&e), "(a < b) and (b <= c)");
    }

    #[test]
    fn conditional_lowers_to_ternary() {
        let e = expr(ExprKind::Conditional {
            test: Box::new(name("a")),
            then: Box::new(num("1")),
            orelse: Box::new(num("2")),
        });
        assert_eq!(translate(&e), "(a ? 1 : 2)");
    }

    #[test]
    fn call_preserves_argument_order() {
        let e = expr(ExprKind::Call {
            func: Box::new(name("x")),
            args: vec![num("1"), num("2")],
        });
        assert_eq!(translate(&e), "x(1, 2)");
    }

    #[test]
    fn string_literal_is_requoted_verbatim() {
        assert_eq!(translate(&expr(ExprKind::Str("hi".into()))), "\"hi\"");
    }
}
