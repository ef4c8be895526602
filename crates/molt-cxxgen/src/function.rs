//! Function-to-generic-struct lowering.
//!
//! A function `def f(p0, .., pn)` lowers to a function object:
//!
//! ```cpp
//! struct f {
//!     template <typename argument_type0, ...>
//!     struct type {
//!         typedef <return label> return_type;
//!     };
//!     template <typename argument_type0, ...>
//!     typename type<argument_type0, ...>::return_type
//!     operator()(argument_type0 p0, ...);
//! };
//!
//! template <typename argument_type0, ...>
//! typename f::type<argument_type0, ...>::return_type
//! f::operator()(argument_type0 p0, ...) { <locals> <body> }
//! ```
//!
//! One synthetic type parameter is created per formal, so the argument types
//! are deduced at each call site rather than declared. The struct skeleton
//! goes to the declarations list and the out-of-line call-operator body to
//! the definitions list; the function's own position in the statement stream
//! becomes an empty statement.

use rustc_hash::FxHashSet;

use molt_core::ast::FunctionDef;
use molt_core::{NodeId, Span, TranslationError};

use crate::collect;
use crate::context::TranslationContext;
use crate::cxx::{self, CxxDecl, CxxStmt, FunctionSignature, Param};
use crate::stmt::StmtTranslator;

type Result<T> = std::result::Result<T, TranslationError>;

/// Lower one function definition into the context's accumulators.
///
/// `node` is the definition's own identity; the type oracle is queried with
/// it for the function's overall return label.
pub fn lower_function(
    ctx: &mut TranslationContext<'_>,
    def: &FunctionDef,
    node: NodeId,
    span: Span,
) -> Result<()> {
    // The sanitization passes remove nested functions before the engine
    // runs; one surviving here means the input was not sanitized.
    if !ctx.scopes().is_empty() {
        return Err(TranslationError::unsupported(
            "nested function definitions are not supported",
            span,
        ));
    }

    let formal_types: Vec<String> = (0..def.args.len())
        .map(|i| format!("argument_type{i}"))
        .collect();

    let locals = collect::assigned_names(&def.body);
    let saved_local_functions = ctx.snapshot_local_functions();

    ctx.scopes.enter_function(
        def.args.iter().map(String::as_str),
        locals.iter().map(|binding| binding.name.as_str()),
    );
    let body = StmtTranslator::new(ctx).translate_block(&def.body);
    // Balanced pop and snapshot restore, also on the error path.
    ctx.scopes.exit_function();
    ctx.restore_local_functions(saved_local_functions);
    let body = body?;

    // Nested alias struct exposing the return type.
    let return_label = ctx.oracle().type_of(node);
    let return_alias = cxx::templatize(
        &formal_types,
        CxxDecl::Struct {
            name: "type".into(),
            body: vec![CxxDecl::Typedef {
                ty: return_label.spelling().into(),
                alias: "return_type".into(),
            }],
        },
    );

    let alias_scope = if formal_types.is_empty() {
        "type::".to_string()
    } else {
        format!("type<{}>::", formal_types.join(", "))
    };
    let params: Vec<Param> = formal_types
        .iter()
        .zip(&def.args)
        .map(|(ty, name)| Param {
            ty: ty.clone(),
            name: name.clone(),
        })
        .collect();

    let operator_decl = cxx::templatize(
        &formal_types,
        CxxDecl::FunctionDecl(FunctionSignature {
            result: format!("typename {alias_scope}return_type"),
            name: "operator()".into(),
            params: params.clone(),
        }),
    );

    ctx.push_declaration(CxxDecl::Struct {
        name: def.name.clone(),
        body: vec![return_alias, operator_decl],
    });

    // Up-front declarations for concretely-typed locals; deduced ones are
    // declared at their first assignment instead.
    let formals: FxHashSet<&str> = def.args.iter().map(String::as_str).collect();
    let mut definition_body = Vec::with_capacity(locals.len() + body.len());
    for binding in &locals {
        if formals.contains(binding.name.as_str()) {
            continue;
        }
        let label = ctx.oracle().type_of(binding.node);
        if !label.is_deduced() {
            definition_body.push(CxxStmt::Line(format!(
                "{} {}",
                label.spelling(),
                binding.name
            )));
        }
    }
    definition_body.extend(body);

    ctx.push_definition(cxx::templatize(
        &formal_types,
        CxxDecl::FunctionDef {
            signature: FunctionSignature {
                result: format!("typename {}::{alias_scope}return_type", def.name),
                name: format!("{}::operator()", def.name),
                params,
            },
            body: definition_body,
        },
    ));
    Ok(())
}
