//! The static map of built-in operator tokens to (precedence, associativity,
//! fixity) — the fixed half of the Pratt engine's operator table. The other
//! half is supplied per-identifier by the oracle (`oracle.rs`).
//!
//! Levels mirror the ladder in the parser's design: higher binds tighter.

use rix_ast::Associativity;

pub const LEVEL_ASSIGNMENT: u16 = 10;
pub const LEVEL_PIPE: u16 = 20;
pub const LEVEL_ARROW: u16 = 25;
pub const LEVEL_CONDITION: u16 = 45;
pub const LEVEL_EQUALITY: u16 = 50;
pub const LEVEL_ORDERING: u16 = 60;
pub const LEVEL_INTERVAL: u16 = 70;
pub const LEVEL_ADDITIVE: u16 = 80;
pub const LEVEL_MULTIPLICATIVE: u16 = 90;
pub const LEVEL_POWER: u16 = 100;
pub const LEVEL_PREFIX: u16 = 110;
pub const LEVEL_PRIME: u16 = 115;
pub const LEVEL_POSTFIX: u16 = 120;
pub const LEVEL_PROPERTY: u16 = 130;

/// The assignment-and-equation family: right-associative, the loosest
/// binding operators besides the statement terminator.
pub const ASSIGNMENT_OPS: &[&str] = &[":=", ":=:", ":<:", ":>:", ":<=:", ":>=:", ":=>", "=>", ":->"];

/// The pipe family. Only five of these name a dedicated node kind
/// (`rix_ast::PipeKind`); the rest are carried as `PipeKind::Other`.
pub const PIPE_OPS: &[&str] = &["|>", "||>", "|>>", "|>?", "|>:", "|+", "|*", "|:", "|;", "|^", "|?"];

pub const EQUALITY_OPS: &[&str] = &["=", "?=", "!=", "=="];
pub const ORDERING_OPS: &[&str] = &["<", ">", "<=", ">=", "?<", "?>", "?<=", "?>="];
pub const ADDITIVE_OPS: &[&str] = &["+", "-"];
pub const MULTIPLICATIVE_OPS: &[&str] = &["*", "/", "//", "%", "/^", "/~", "/%"];
pub const POWER_OPS: &[&str] = &["^", "**"];

/// Returns `(precedence, associativity)` for a built-in symbol used in
/// infix position, or `None` if it is not a built-in infix operator (it
/// may still be an oracle-declared one, or not an operator at all).
pub fn infix_binding(op: &str) -> Option<(u16, Associativity)> {
    if ASSIGNMENT_OPS.contains(&op) {
        return Some((LEVEL_ASSIGNMENT, Associativity::Right));
    }
    if PIPE_OPS.contains(&op) {
        return Some((LEVEL_PIPE, Associativity::Left));
    }
    if op == "->" {
        return Some((LEVEL_ARROW, Associativity::Right));
    }
    if op == "?" {
        return Some((LEVEL_CONDITION, Associativity::Left));
    }
    if EQUALITY_OPS.contains(&op) {
        return Some((LEVEL_EQUALITY, Associativity::Left));
    }
    if ORDERING_OPS.contains(&op) {
        return Some((LEVEL_ORDERING, Associativity::Left));
    }
    if op == ":" {
        return Some((LEVEL_INTERVAL, Associativity::Left));
    }
    if ADDITIVE_OPS.contains(&op) {
        return Some((LEVEL_ADDITIVE, Associativity::Left));
    }
    if MULTIPLICATIVE_OPS.contains(&op) {
        return Some((LEVEL_MULTIPLICATIVE, Associativity::Left));
    }
    if POWER_OPS.contains(&op) {
        return Some((LEVEL_POWER, Associativity::Right));
    }
    None
}

/// Returns the binding precedence for a built-in symbol used in prefix
/// position (only `+` and `-`; `NOT` is oracle-supplied).
pub fn prefix_binding(op: &str) -> Option<u16> {
    match op {
        "+" | "-" => Some(LEVEL_PREFIX),
        _ => None,
    }
}

/// Whether `op` is one of the three arrows that triggers arrow lowering.
pub fn is_arrow(op: &str) -> bool {
    matches!(op, "->" | ":->" | ":=>")
}

/// Whether `op` is one of the four equation comparators that force a
/// `{ ... }` container to classify as `System`.
pub fn is_equation_op(op: &str) -> bool {
    matches!(op, ":=:" | ":<:" | ":>:" | ":<=:" | ":>=:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_family_is_right_associative() {
        assert_eq!(infix_binding(":="), Some((LEVEL_ASSIGNMENT, Associativity::Right)));
        assert_eq!(infix_binding(":->"), Some((LEVEL_ASSIGNMENT, Associativity::Right)));
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_multiplication() {
        let (power_prec, assoc) = infix_binding("^").unwrap();
        assert_eq!(assoc, Associativity::Right);
        let (mul_prec, _) = infix_binding("*").unwrap();
        assert!(power_prec > mul_prec);
    }

    #[test]
    fn unknown_symbol_is_not_a_builtin_operator() {
        assert_eq!(infix_binding("AND"), None);
        assert_eq!(infix_binding("@"), None);
    }
}
