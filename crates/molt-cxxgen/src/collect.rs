//! Name-collection passes over the sanitized tree.
//!
//! Two read-only walks run ahead of translation proper:
//!
//! - [`module_functions`] computes the Global Declaration Set (names of all
//!   top-level function definitions), stable for the whole translation.
//! - [`assigned_names`] collects every identifier bound anywhere in a
//!   function body, so the function's scope frame and up-front local
//!   declarations can be built before the body is translated.

use rustc_hash::FxHashSet;

use molt_core::NodeId;
use molt_core::ast::{Expr, ExprKind, Stmt, StmtKind};

/// A name bound somewhere in a function body, with the identity of its
/// first binding occurrence (the node the type oracle is queried with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBinding {
    pub name: String,
    pub node: NodeId,
}

/// Names of all top-level function definitions in a module body.
pub fn module_functions(body: &[Stmt]) -> FxHashSet<String> {
    body.iter()
        .filter_map(|stmt| match &stmt.kind {
            StmtKind::FunctionDef(def) => Some(def.name.clone()),
            _ => None,
        })
        .collect()
}

/// All names assigned anywhere in a function body, deduplicated in
/// first-occurrence order.
///
/// Binding forms are assignment targets, augmented-assignment targets, and
/// loop targets. Subscript targets rebind an element, not a name, and are
/// skipped. Nested function definitions are not descended into; the
/// translator rejects them separately.
pub fn assigned_names(body: &[Stmt]) -> Vec<LocalBinding> {
    let mut bindings = Vec::new();
    let mut seen = FxHashSet::default();
    collect_block(body, &mut bindings, &mut seen);
    bindings
}

fn collect_block(body: &[Stmt], bindings: &mut Vec<LocalBinding>, seen: &mut FxHashSet<String>) {
    for stmt in body {
        collect_stmt(stmt, bindings, seen);
    }
}

fn collect_stmt(stmt: &Stmt, bindings: &mut Vec<LocalBinding>, seen: &mut FxHashSet<String>) {
    match &stmt.kind {
        StmtKind::Assign { targets, .. } => {
            for target in targets {
                bind_target(target, bindings, seen);
            }
        }
        StmtKind::AugAssign { target, .. } => bind_target(target, bindings, seen),
        StmtKind::For {
            target,
            body,
            orelse,
            ..
        } => {
            bind_target(target, bindings, seen);
            collect_block(body, bindings, seen);
            collect_block(orelse, bindings, seen);
        }
        StmtKind::While { body, orelse, .. } | StmtKind::If { body, orelse, .. } => {
            collect_block(body, bindings, seen);
            collect_block(orelse, bindings, seen);
        }
        _ => {}
    }
}

fn bind_target(target: &Expr, bindings: &mut Vec<LocalBinding>, seen: &mut FxHashSet<String>) {
    if let ExprKind::Name(name) = &target.kind
        && seen.insert(name.clone())
    {
        bindings.push(LocalBinding {
            name: name.clone(),
            node: target.id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molt_core::Span;

    fn name(id: u32, s: &str) -> Expr {
        Expr::new(NodeId(id), Span::default(), ExprKind::Name(s.into()))
    }

    fn num(s: &str) -> Expr {
        Expr::new(NodeId(0), Span::default(), ExprKind::Num(s.into()))
    }

    fn stmt(kind: StmtKind) -> Stmt {
        Stmt::new(NodeId(0), Span::default(), kind)
    }

    #[test]
    fn collects_in_first_occurrence_order() {
        let body = vec![
            stmt(StmtKind::Assign {
                targets: vec![name(1, "b")],
                value: num("0"),
            }),
            stmt(StmtKind::Assign {
                targets: vec![name(2, "a")],
                value: num("0"),
            }),
            stmt(StmtKind::AugAssign {
                target: name(3, "b"),
                op: molt_core::ast::BinaryOp::Add,
                value: num("1"),
            }),
        ];

        let bindings = assigned_names(&body);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].name, "b");
        assert_eq!(bindings[0].node, NodeId(1));
        assert_eq!(bindings[1].name, "a");
    }

    #[test]
    fn descends_into_control_flow() {
        let body = vec![stmt(StmtKind::For {
            target: name(1, "i"),
            iter: name(2, "r"),
            body: vec![stmt(StmtKind::Assign {
                targets: vec![name(3, "x")],
                value: num("0"),
            })],
            orelse: vec![stmt(StmtKind::Assign {
                targets: vec![name(4, "y")],
                value: num("0"),
            })],
        })];

        let names: Vec<_> = assigned_names(&body).into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["i", "x", "y"]);
    }

    #[test]
    fn subscript_targets_are_not_bindings() {
        let target = Expr::new(
            NodeId(1),
            Span::default(),
            ExprKind::Subscript {
                value: Box::new(name(2, "xs")),
                index: Box::new(Expr::new(
                    NodeId(3),
                    Span::default(),
                    ExprKind::Index(Box::new(num("0"))),
                )),
            },
        );
        let body = vec![stmt(StmtKind::Assign {
            targets: vec![target],
            value: num("0"),
        })];

        assert!(assigned_names(&body).is_empty());
    }

    #[test]
    fn module_functions_collects_top_level_defs() {
        use molt_core::ast::FunctionDef;
        let body = vec![
            stmt(StmtKind::FunctionDef(FunctionDef {
                name: "f".into(),
                args: vec![],
                body: vec![stmt(StmtKind::Pass)],
            })),
            stmt(StmtKind::Pass),
        ];

        let globals = module_functions(&body);
        assert!(globals.contains("f"));
        assert_eq!(globals.len(), 1);
    }
}
