//! The sanitized program tree consumed by the translation engine.
//!
//! These nodes model the statically-inferable subset of the dynamic source
//! language *after* the sanitization passes have run: comprehensions,
//! nested functions, and lambdas never appear here. The parser and the
//! sanitizer own construction; the engine treats the tree as immutable.
//!
//! Every statement and expression carries a [`NodeId`] (the identity the
//! type oracle is keyed by) and a [`Span`] for diagnostics.

use crate::Span;

/// Identity of a program node, unique within one compilation.
///
/// Type labels are keyed by node identity, not by name: two occurrences of
/// the same identifier can carry different labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

// ============================================================================
// Operators
// ============================================================================

/// Binary arithmetic and bitwise operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Invert,
    Not,
    Plus,
    Minus,
}

/// Short-circuiting boolean combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
}

/// Comparison operators, including identity and membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: NodeId,
    pub span: Span,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(id: NodeId, span: Span, kind: ExprKind) -> Self {
        Self { id, span, kind }
    }
}

/// Expression kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// An `and`/`or` chain over two or more operands.
    BoolCombination { op: BoolOp, values: Vec<Expr> },
    /// A binary operator application.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// A unary operator application.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// A conditional expression `then if test else orelse`.
    Conditional {
        test: Box<Expr>,
        then: Box<Expr>,
        orelse: Box<Expr>,
    },
    /// A list literal.
    List(Vec<Expr>),
    /// A tuple literal.
    Tuple(Vec<Expr>),
    /// A chained comparison `left op0 c0 op1 c1 ...`.
    ///
    /// `ops` and `comparators` have the same length.
    Compare {
        left: Box<Expr>,
        ops: Vec<CmpOp>,
        comparators: Vec<Expr>,
    },
    /// A call with positional arguments.
    Call { func: Box<Expr>, args: Vec<Expr> },
    /// A numeric literal, kept as its verbatim source spelling.
    Num(String),
    /// A string literal (unescaped content, without quotes).
    Str(String),
    /// A subscript `value[index]`; `index` is an [`ExprKind::Index`] wrapper
    /// or an [`ExprKind::Slice`].
    Subscript { value: Box<Expr>, index: Box<Expr> },
    /// An identifier reference.
    Name(String),
    /// A slice `lower:upper:step` with any bound optional.
    Slice {
        lower: Option<Box<Expr>>,
        upper: Option<Box<Expr>>,
        step: Option<Box<Expr>>,
    },
    /// A plain-index wrapper around the subscripting value.
    Index(Box<Expr>),
}

// ============================================================================
// Statements
// ============================================================================

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub id: NodeId,
    pub span: Span,
    pub kind: StmtKind,
}

impl Stmt {
    pub fn new(id: NodeId, span: Span, kind: StmtKind) -> Self {
        Self { id, span, kind }
    }
}

/// A function definition.
///
/// After sanitization these only appear at module top level; the engine
/// rejects any that survive in a nested position.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    /// Formal parameter names, in declaration order.
    pub args: Vec<String>,
    pub body: Vec<Stmt>,
}

/// One `name` or `name as alias` entry of an import statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportAlias {
    pub name: String,
    pub asname: Option<String>,
}

/// Statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    FunctionDef(FunctionDef),
    /// Class definitions have no lowering strategy and always fail.
    ClassDef { name: String },
    Return(Option<Expr>),
    /// Unbinding has no target-language equivalent; lowers to a no-op.
    Delete(Vec<Expr>),
    Assign { targets: Vec<Expr>, value: Expr },
    AugAssign {
        target: Expr,
        op: BinaryOp,
        value: Expr,
    },
    Print {
        /// Redirection target of `print >> dest`, unsupported when present.
        dest: Option<Expr>,
        values: Vec<Expr>,
        /// Whether a trailing newline is printed.
        newline: bool,
    },
    For {
        target: Expr,
        iter: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    While {
        test: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    If {
        test: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    Assert { test: Expr, msg: Option<Expr> },
    ImportFrom {
        module: Option<String>,
        names: Vec<ImportAlias>,
        level: u32,
    },
    /// An expression evaluated for effect.
    Expr(Expr),
    Pass,
    Break,
    Continue,
}

// ============================================================================
// Program roots
// ============================================================================

/// The root of a parsed compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: NodeId,
    pub span: Span,
    pub kind: ProgramKind,
}

impl Program {
    pub fn new(id: NodeId, span: Span, kind: ProgramKind) -> Self {
        Self { id, span, kind }
    }

    /// Convenience constructor for the only translatable root kind.
    pub fn module(body: Vec<Stmt>) -> Self {
        Self::new(NodeId(0), Span::default(), ProgramKind::Module(body))
    }
}

/// Root kinds. Only [`ProgramKind::Module`] has a translation strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramKind {
    /// An ordinary source module.
    Module(Vec<Stmt>),
    /// An interactive session transcript.
    Interactive(Vec<Stmt>),
    /// A bare top-level expression.
    Expression(Expr),
    /// An alternate-runtime statement suite.
    Suite(Vec<Stmt>),
}
