//! Operator-to-expression builders.
//!
//! Each builder turns an operator kind plus already-translated operand
//! fragments into a parenthesized target-language spelling. The tables are
//! total `match`es over the operator enums, so an unknown-operator
//! configuration error is unrepresentable: adding an operator kind without a
//! spelling fails to compile.
//!
//! The boolean and `not` spellings use the C++ alternative tokens (`and`,
//! `or`, `not`), which keeps the emitted code close to the source and stays
//! valid C++. Operators with no native C++ equivalent (`**`, `//`,
//! membership tests) route through runtime helpers.

use molt_core::ast::{BinaryOp, BoolOp, CmpOp, UnaryOp};

/// Build a binary operator application.
pub fn binary(op: BinaryOp, left: &str, right: &str) -> String {
    match op {
        BinaryOp::Pow => format!("pow({left}, {right})"),
        BinaryOp::FloorDiv => format!("floordiv({left}, {right})"),
        _ => format!("({left} {} {right})", binary_token(op)),
    }
}

fn binary_token(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::LShift => "<<",
        BinaryOp::RShift => ">>",
        BinaryOp::BitOr => "|",
        BinaryOp::BitXor => "^",
        BinaryOp::BitAnd => "&",
        // Handled as calls in `binary`.
        BinaryOp::Pow | BinaryOp::FloorDiv => unreachable!("spelled as a call"),
    }
}

/// Build a unary operator application.
pub fn unary(op: UnaryOp, operand: &str) -> String {
    let token = match op {
        UnaryOp::Invert => "~",
        UnaryOp::Not => "not ",
        UnaryOp::Plus => "+",
        UnaryOp::Minus => "-",
    };
    format!("({token}{operand})")
}

/// Build one step of an `and`/`or` chain.
pub fn boolean(op: BoolOp, left: &str, right: &str) -> String {
    let token = match op {
        BoolOp::And => "and",
        BoolOp::Or => "or",
    };
    format!("({left} {token} {right})")
}

/// Build a single pairwise comparison.
pub fn comparison(op: CmpOp, left: &str, right: &str) -> String {
    match op {
        CmpOp::Eq | CmpOp::Is => format!("({left} == {right})"),
        CmpOp::NotEq | CmpOp::IsNot => format!("({left} != {right})"),
        CmpOp::Lt => format!("({left} < {right})"),
        CmpOp::LtE => format!("({left} <= {right})"),
        CmpOp::Gt => format!("({left} > {right})"),
        CmpOp::GtE => format!("({left} >= {right})"),
        CmpOp::In => format!("in({left}, {right})"),
        CmpOp::NotIn => format!("(not in({left}, {right}))"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_spellings() {
        assert_eq!(binary(BinaryOp::Add, "a", "b"), "(a + b)");
        assert_eq!(binary(BinaryOp::Mod, "a", "b"), "(a % b)");
        assert_eq!(binary(BinaryOp::LShift, "a", "2"), "(a << 2)");
    }

    #[test]
    fn helper_call_spellings() {
        assert_eq!(binary(BinaryOp::Pow, "x", "2"), "pow(x, 2)");
        assert_eq!(binary(BinaryOp::FloorDiv, "x", "3"), "floordiv(x, 3)");
    }

    #[test]
    fn unary_spellings() {
        assert_eq!(unary(UnaryOp::Minus, "x"), "(-x)");
        assert_eq!(unary(UnaryOp::Not, "x"), "(not x)");
        assert_eq!(unary(UnaryOp::Invert, "x"), "(~x)");
    }

    #[test]
    fn boolean_spellings() {
        assert_eq!(boolean(BoolOp::And, "a", "b"), "(a and b)");
        assert_eq!(boolean(BoolOp::Or, "a", "b"), "(a or b)");
    }

    #[test]
    fn comparison_spellings() {
        assert_eq!(comparison(CmpOp::LtE, "a", "b"), "(a <= b)");
        assert_eq!(comparison(CmpOp::Is, "a", "b"), "(a == b)");
        assert_eq!(comparison(CmpOp::In, "a", "b"), "in(a, b)");
        assert_eq!(comparison(CmpOp::NotIn, "a", "b"), "(not in(a, b))");
    }
}
