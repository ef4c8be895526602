//! Statement translation.
//!
//! The [`StmtTranslator`] converts each statement node into a target
//! statement or block, recursing into nested statements and delegating
//! values to the expression translator:
//!
//! - assignments and augmented assignments live in [`assign`]
//! - for/while loops and their `else` lowering live in [`loops`]
//! - `from module import name` handling lives in [`import`]
//! - function definitions delegate to the function lowering strategy and
//!   leave an empty statement in their original position

mod assign;
mod import;
mod loops;

use molt_core::TranslationError;
use molt_core::ast::{Expr, Stmt, StmtKind};

use crate::context::TranslationContext;
use crate::cxx::CxxStmt;
use crate::expr::ExprTranslator;
use crate::function;

type Result<T> = std::result::Result<T, TranslationError>;

/// Translates statement nodes into target statements.
pub struct StmtTranslator<'a, 'ctx> {
    ctx: &'a mut TranslationContext<'ctx>,
}

impl<'a, 'ctx> StmtTranslator<'a, 'ctx> {
    pub fn new(ctx: &'a mut TranslationContext<'ctx>) -> Self {
        Self { ctx }
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut TranslationContext<'ctx> {
        self.ctx
    }

    /// An expression translator over the same context.
    fn expr(&self) -> ExprTranslator<'_, 'ctx> {
        ExprTranslator::new(self.ctx)
    }

    fn translate_expr(&self, expr: &Expr) -> Result<String> {
        self.expr().translate(expr)
    }

    /// Translate a statement.
    pub fn translate(&mut self, stmt: &Stmt) -> Result<CxxStmt> {
        match &stmt.kind {
            StmtKind::FunctionDef(def) => {
                function::lower_function(self.ctx, def, stmt.id, stmt.span)?;
                // The declaration and definition were folded into the
                // accumulators; the original position becomes a no-op.
                Ok(CxxStmt::Empty)
            }
            StmtKind::ClassDef { .. } => Err(TranslationError::unsupported(
                "classes are not supported",
                stmt.span,
            )),
            StmtKind::Return(value) => {
                let value = value.as_ref().map(|v| self.translate_expr(v)).transpose()?;
                Ok(CxxStmt::Return(value))
            }
            // Unbinding a name has no target-language equivalent.
            StmtKind::Delete(_) => Ok(CxxStmt::Empty),
            StmtKind::Assign { targets, value } => assign::translate_assign(self, targets, value, stmt.span),
            StmtKind::AugAssign { target, op, value } => {
                assign::translate_aug_assign(self, target, *op, value)
            }
            StmtKind::Print {
                dest,
                values,
                newline,
            } => self.translate_print(dest.as_ref(), values, *newline),
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            } => loops::translate_for(self, target, iter, body, orelse),
            StmtKind::While { test, body, orelse } => loops::translate_while(self, test, body, orelse),
            StmtKind::If { test, body, orelse } => {
                let test = self.translate_expr(test)?;
                let then = self.translate_block(body)?;
                // An absent else block is distinguished from an empty one.
                let orelse = if orelse.is_empty() {
                    None
                } else {
                    Some(self.translate_block(orelse)?)
                };
                Ok(CxxStmt::If { test, then, orelse })
            }
            StmtKind::Assert { test, msg } => self.translate_assert(test, msg.as_ref()),
            StmtKind::ImportFrom {
                module,
                names,
                level,
            } => import::translate_import_from(self, module.as_deref(), names, *level, stmt.span),
            StmtKind::Expr(value) => Ok(CxxStmt::Line(self.translate_expr(value)?)),
            StmtKind::Pass => Ok(CxxStmt::Empty),
            StmtKind::Break => Ok(CxxStmt::Line("break".into())),
            StmtKind::Continue => Ok(CxxStmt::Line("continue".into())),
        }
    }

    /// Translate a statement list.
    pub fn translate_block(&mut self, stmts: &[Stmt]) -> Result<Vec<CxxStmt>> {
        stmts.iter().map(|stmt| self.translate(stmt)).collect()
    }

    fn translate_print(
        &mut self,
        dest: Option<&Expr>,
        values: &[Expr],
        newline: bool,
    ) -> Result<CxxStmt> {
        if let Some(dest) = dest {
            return Err(TranslationError::unsupported(
                "printing to a specific stream",
                dest.span,
            ));
        }
        let values = values
            .iter()
            .map(|value| self.translate_expr(value))
            .collect::<Result<Vec<_>>>()?;
        let helper = if newline { "print" } else { "print_nonl" };
        Ok(CxxStmt::Line(format!("{helper}({})", values.join(", "))))
    }

    /// Lower an assertion to the native `assert`, passing the message (when
    /// present) ahead of the test through the comma operator.
    fn translate_assert(&mut self, test: &Expr, msg: Option<&Expr>) -> Result<CxxStmt> {
        let mut parts = Vec::with_capacity(2);
        if let Some(msg) = msg {
            parts.push(self.translate_expr(msg)?);
        }
        parts.push(self.translate_expr(test)?);
        Ok(CxxStmt::Line(format!("assert(({}))", parts.join(", "))))
    }
}
