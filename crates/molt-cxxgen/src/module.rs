//! Module assembly: the top-level driver of the translation walk.
//!
//! The assembler expects the sanitization passes to have already run; the
//! engine's invariants (no nested functions, no comprehensions, no lambdas
//! in the tree) depend on it. It computes the Global Declaration Set,
//! translates every top-level statement, and wraps the result in one
//! namespace per source module: translated statements first (mostly empty
//! statements once functions have been folded out), then all accumulated
//! struct declarations, then all out-of-line definitions.

use molt_core::ast::{Program, ProgramKind};
use molt_core::{TranslationError, TypeOracle};
use molt_registry::ModuleRegistry;

use crate::collect;
use crate::context::TranslationContext;
use crate::cxx::{NamespaceBlock, TranslationUnit};
use crate::stmt::StmtTranslator;

type Result<T> = std::result::Result<T, TranslationError>;

/// Headers every generated unit includes, in order.
pub const RUNTIME_HEADERS: [&str; 2] = ["molt/runtime.hpp", "boost/python/module.hpp"];

/// Translate one sanitized module into a generated translation unit.
///
/// Fail-fast: the first construct with no lowering strategy aborts the whole
/// module with that single diagnostic, and no partial output is produced.
pub fn translate_module(
    name: &str,
    program: &Program,
    oracle: &dyn TypeOracle,
    registry: &ModuleRegistry,
) -> Result<TranslationUnit> {
    let body = match &program.kind {
        ProgramKind::Module(body) => body,
        ProgramKind::Interactive(_) => {
            return Err(TranslationError::unsupported(
                "interactive sessions are not supported",
                program.span,
            ));
        }
        ProgramKind::Expression(_) => {
            return Err(TranslationError::unsupported(
                "top-level expressions are not supported",
                program.span,
            ));
        }
        ProgramKind::Suite(_) => {
            return Err(TranslationError::unsupported(
                "suites are not supported",
                program.span,
            ));
        }
    };

    let globals = collect::module_functions(body);
    let mut ctx = TranslationContext::new(oracle, registry, globals);

    let stmts = StmtTranslator::new(&mut ctx).translate_block(body)?;
    debug_assert!(
        ctx.scopes().is_empty(),
        "scope frames must be balanced after module translation"
    );

    let (declarations, definitions) = ctx.into_output();
    Ok(TranslationUnit {
        headers: RUNTIME_HEADERS.iter().map(|h| h.to_string()).collect(),
        namespaces: vec![NamespaceBlock {
            name: name.to_string(),
            stmts,
            declarations,
            definitions,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use molt_core::ast::{Expr, ExprKind, FunctionDef, NodeId, Stmt, StmtKind};
    use molt_core::{Span, TypeTable};

    fn stmt(kind: StmtKind) -> Stmt {
        Stmt::new(NodeId(0), Span::default(), kind)
    }

    fn def(name: &str, body: Vec<Stmt>) -> Stmt {
        stmt(StmtKind::FunctionDef(FunctionDef {
            name: name.into(),
            args: vec![],
            body,
        }))
    }

    #[test]
    fn non_module_roots_are_rejected() {
        let oracle = TypeTable::new();
        let registry = ModuleRegistry::with_default_modules();

        for kind in [
            ProgramKind::Interactive(vec![]),
            ProgramKind::Expression(Expr::new(
                NodeId(0),
                Span::default(),
                ExprKind::Num("1".into()),
            )),
            ProgramKind::Suite(vec![]),
        ] {
            let program = Program::new(NodeId(0), Span::new(1, 1), kind);
            let err = translate_module("m", &program, &oracle, &registry).unwrap_err();
            assert_eq!(err.span(), Span::new(1, 1));
        }
    }

    #[test]
    fn declarations_precede_definitions_in_encounter_order() {
        let oracle = TypeTable::new();
        let registry = ModuleRegistry::with_default_modules();
        let program = Program::module(vec![
            def("first", vec![stmt(StmtKind::Return(None))]),
            def("second", vec![stmt(StmtKind::Return(None))]),
        ]);

        let unit = translate_module("m", &program, &oracle, &registry).unwrap();
        let ns = &unit.namespaces[0];
        assert_eq!(ns.name, "m");
        // Both top-level statements became no-op placeholders.
        assert_eq!(ns.stmts.len(), 2);
        assert_eq!(ns.declarations.len(), 2);
        assert_eq!(ns.definitions.len(), 2);

        let names: Vec<_> = ns
            .declarations
            .iter()
            .map(|decl| match decl {
                crate::cxx::CxxDecl::Struct { name, .. } => name.clone(),
                other => panic!("unexpected declaration {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["first", "second"]);

        let text = unit.to_source();
        let decl_pos = text.find("struct first").unwrap();
        let def_pos = text.find("first::operator()").unwrap();
        assert!(decl_pos < def_pos);
    }

    #[test]
    fn headers_are_fixed_and_ordered() {
        let oracle = TypeTable::new();
        let registry = ModuleRegistry::with_default_modules();
        let program = Program::module(vec![]);

        let unit = translate_module("m", &program, &oracle, &registry).unwrap();
        let text = unit.to_source();
        assert!(text.starts_with(
            "#include \"molt/runtime.hpp\"\n#include \"boost/python/module.hpp\"\n"
        ));
    }

    #[test]
    fn sibling_functions_do_not_share_locals() {
        // `g` references `x`, which is local only to `f`; with balanced
        // frames the reference in `g` resolves as a raw pass-through, not a
        // stale local.
        let oracle = TypeTable::new();
        let registry = ModuleRegistry::with_default_modules();
        let x = |id: u32| Expr::new(NodeId(id), Span::default(), ExprKind::Name("x".into()));

        let program = Program::module(vec![
            stmt(StmtKind::FunctionDef(FunctionDef {
                name: "f".into(),
                args: vec!["x".into()],
                body: vec![stmt(StmtKind::Return(Some(x(1))))],
            })),
            stmt(StmtKind::FunctionDef(FunctionDef {
                name: "g".into(),
                args: vec![],
                body: vec![stmt(StmtKind::Return(Some(x(2))))],
            })),
        ]);

        let unit = translate_module("m", &program, &oracle, &registry).unwrap();
        assert!(unit.to_source().contains("return x;"));
    }
}
