//! Abstract C++ output nodes and their text rendering.
//!
//! The translators build [`CxxStmt`] and [`CxxDecl`] trees instead of
//! concatenating text directly, so structure (blocks, template headers,
//! namespaces) is decided in one place. Expressions stay plain strings:
//! they never influence indentation.
//!
//! [`TranslationUnit`] is the final product: a fixed header list followed by
//! one namespace per source module, each rendering its translated top-level
//! statements, then the accumulated struct declarations, then the
//! out-of-line definitions.

use std::fmt;

const INDENT: &str = "    ";

// ============================================================================
// Statements
// ============================================================================

/// A target-language statement or block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CxxStmt {
    /// An empty statement, `;`.
    Empty,
    /// A one-line statement; the rendered form appends the semicolon.
    Line(String),
    /// `return;` or `return value;`.
    Return(Option<String>),
    /// `if (test) { then } else { orelse }`; no else block is emitted when
    /// `orelse` is `None`.
    If {
        test: String,
        then: Vec<CxxStmt>,
        orelse: Option<Vec<CxxStmt>>,
    },
    /// `while (test) { body }`.
    While { test: String, body: Vec<CxxStmt> },
    /// A range-based for over a deduced element type,
    /// `for (auto& target : iter) { body }`.
    RangeFor {
        target: String,
        iter: String,
        body: Vec<CxxStmt>,
    },
}

// ============================================================================
// Declarations
// ============================================================================

/// A function parameter, `ty name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

/// A function signature shared by declarations and definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Result type spelling, possibly `typename`-qualified.
    pub result: String,
    /// Function name, possibly scope-qualified (`f::operator()`).
    pub name: String,
    pub params: Vec<Param>,
}

/// A target-language declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CxxDecl {
    /// `struct name { body };`
    Struct { name: String, body: Vec<CxxDecl> },
    /// `typedef ty alias;`
    Typedef { ty: String, alias: String },
    /// A function declaration without a body.
    FunctionDecl(FunctionSignature),
    /// A function definition with a statement body.
    FunctionDef {
        signature: FunctionSignature,
        body: Vec<CxxStmt>,
    },
    /// `template <typename p0, ...>` wrapping another declaration.
    Template {
        params: Vec<String>,
        inner: Box<CxxDecl>,
    },
}

/// Wrap a declaration in a template header, unless the parameter list is
/// empty (a zero-argument function lowers to a plain declaration).
pub fn templatize(params: &[String], decl: CxxDecl) -> CxxDecl {
    if params.is_empty() {
        decl
    } else {
        CxxDecl::Template {
            params: params.to_vec(),
            inner: Box::new(decl),
        }
    }
}

// ============================================================================
// Translation unit
// ============================================================================

/// One namespace block of the output, wrapping a translated source module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBlock {
    pub name: String,
    /// Translated top-level statements (mostly empty statements once
    /// function definitions have been folded out).
    pub stmts: Vec<CxxStmt>,
    /// Generic struct skeletons, one per function, in encounter order.
    pub declarations: Vec<CxxDecl>,
    /// Out-of-line call-operator definitions, in encounter order.
    pub definitions: Vec<CxxDecl>,
}

/// The complete generated output for one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    /// Include paths emitted before any namespace.
    pub headers: Vec<String>,
    pub namespaces: Vec<NamespaceBlock>,
}

impl TranslationUnit {
    /// Render the unit as target-language source text.
    pub fn to_source(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TranslationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in &self.headers {
            writeln!(f, "#include \"{header}\"")?;
        }
        for ns in &self.namespaces {
            writeln!(f)?;
            writeln!(f, "namespace {} {{", ns.name)?;
            for stmt in &ns.stmts {
                write_stmt(f, stmt, 1)?;
            }
            for decl in &ns.declarations {
                write_decl(f, decl, 1)?;
            }
            for decl in &ns.definitions {
                write_decl(f, decl, 1)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn pad(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[CxxStmt], level: usize) -> fmt::Result {
    for stmt in body {
        write_stmt(f, stmt, level + 1)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &CxxStmt, level: usize) -> fmt::Result {
    match stmt {
        CxxStmt::Empty => {
            pad(f, level)?;
            writeln!(f, ";")
        }
        CxxStmt::Line(text) => {
            pad(f, level)?;
            writeln!(f, "{text};")
        }
        CxxStmt::Return(None) => {
            pad(f, level)?;
            writeln!(f, "return;")
        }
        CxxStmt::Return(Some(value)) => {
            pad(f, level)?;
            writeln!(f, "return {value};")
        }
        CxxStmt::If { test, then, orelse } => {
            pad(f, level)?;
            writeln!(f, "if ({test}) {{")?;
            write_block(f, then, level)?;
            pad(f, level)?;
            match orelse {
                Some(orelse) => {
                    writeln!(f, "}} else {{")?;
                    write_block(f, orelse, level)?;
                    pad(f, level)?;
                    writeln!(f, "}}")
                }
                None => writeln!(f, "}}"),
            }
        }
        CxxStmt::While { test, body } => {
            pad(f, level)?;
            writeln!(f, "while ({test}) {{")?;
            write_block(f, body, level)?;
            pad(f, level)?;
            writeln!(f, "}}")
        }
        CxxStmt::RangeFor { target, iter, body } => {
            pad(f, level)?;
            writeln!(f, "for (auto& {target} : {iter}) {{")?;
            write_block(f, body, level)?;
            pad(f, level)?;
            writeln!(f, "}}")
        }
    }
}

fn render_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_decl(f: &mut fmt::Formatter<'_>, decl: &CxxDecl, level: usize) -> fmt::Result {
    match decl {
        CxxDecl::Struct { name, body } => {
            pad(f, level)?;
            writeln!(f, "struct {name} {{")?;
            for member in body {
                write_decl(f, member, level + 1)?;
            }
            pad(f, level)?;
            writeln!(f, "}};")
        }
        CxxDecl::Typedef { ty, alias } => {
            pad(f, level)?;
            writeln!(f, "typedef {ty} {alias};")
        }
        CxxDecl::FunctionDecl(sig) => {
            pad(f, level)?;
            writeln!(f, "{} {}({});", sig.result, sig.name, render_params(&sig.params))
        }
        CxxDecl::FunctionDef { signature, body } => {
            pad(f, level)?;
            writeln!(
                f,
                "{} {}({}) {{",
                signature.result,
                signature.name,
                render_params(&signature.params)
            )?;
            write_block(f, body, level)?;
            pad(f, level)?;
            writeln!(f, "}}")
        }
        CxxDecl::Template { params, inner } => {
            pad(f, level)?;
            let params = params
                .iter()
                .map(|p| format!("typename {p}"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "template <{params}>")?;
            write_decl(f, inner, level)
        }
    }
}
