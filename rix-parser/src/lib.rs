//! `rix-parser`: a precedence-climbing (Pratt) parser for the core of the
//! RiX expression language (§1-§9 of the grammar this crate implements).
//!
//! Given a pre-lexed token stream and a system-symbol oracle, [`parse`]
//! produces an ordered syntax tree of statements. The tokenizer and the
//! oracle are external collaborators (§6): this crate only consumes them,
//! never produces tokens itself and never evaluates the tree it builds.
//!
//! Module map, leaves first:
//! - [`symbol_table`] / [`oracle`] — the static and oracle-supplied halves
//!   of the operator table the Pratt engine reads from.
//! - [`context`] / [`token`] — the token cursor and the token shape itself.
//! - [`brackets`] / [`params`] / [`calculus`] / [`embedded`] — the
//!   disambiguators and micro-parsers the prefix/infix dispatchers recurse
//!   into.
//! - [`expression`] — the Pratt engine plus prefix/infix dispatch.
//! - [`arrow`] — retroactive parameter-list lowering for `->`/`:->`/`:=>`.
//! - [`statement`] — top-level and code-block statement framing.

pub mod arrow;
pub mod brackets;
pub mod calculus;
pub mod context;
pub mod embedded;
pub mod expression;
pub mod oracle;
pub mod params;
pub mod statement;
pub mod symbol_table;
pub mod token;

#[cfg(test)]
mod fixture_lexer;

pub use context::ParserContext;
pub use oracle::{NullOracle, SystemSymbolOracle};
pub use token::{IdentifierKind, Token, TokenKind, TokenStringKind};

use rix_ast::Program;
use rix_errors::Result;

/// Parses a complete token stream into a syntax tree (§6 output contract).
///
/// `source` is the original program text; it is never re-lexed, only
/// sliced by span to build the verbatim `original` field of composite
/// nodes. `oracle` supplies system-symbol metadata for every System-kind
/// identifier encountered; an unrecognized name must come back as
/// `type: "identifier"` (see [`SystemSymbolOracle`]).
///
/// The parser does not recover: the first [`rix_errors::ParseError`] aborts
/// the whole parse.
pub fn parse<O: SystemSymbolOracle>(tokens: Vec<Token>, source: &str, oracle: &O) -> Result<Program> {
    let mut ctx = ParserContext::new(tokens, source, oracle);
    statement::parse_program(&mut ctx)
}

#[cfg(test)]
pub(crate) fn parse_expression_str<O: SystemSymbolOracle>(source: &str, oracle: &O) -> Result<rix_ast::Node> {
    let tokens = fixture_lexer::lex(source);
    let mut ctx = ParserContext::new(tokens, source, oracle);
    expression::parse_expression(&mut ctx, 0)
}

#[cfg(test)]
pub(crate) fn parse_program_str<O: SystemSymbolOracle>(source: &str, oracle: &O) -> Result<Program> {
    let tokens = fixture_lexer::lex(source);
    let mut ctx = ParserContext::new(tokens, source, oracle);
    statement::parse_program(&mut ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NullOracle;
    use rix_ast::Node;

    #[test]
    fn parses_a_small_program() {
        let program = parse_program_str("f(x) :-> x + 1; g := 3;", &NullOracle).unwrap();
        assert_eq!(program.len(), 2);
        assert!(matches!(program[0], Node::Statement(_)));
        assert!(matches!(program[1], Node::Statement(_)));
    }

    #[test]
    fn matrix_and_tensor_from_spec_examples() {
        let node = parse_expression_str("[1,2;3,4]", &NullOracle).unwrap();
        match node {
            Node::Matrix(m) => {
                let values: Vec<Vec<&str>> = m.rows.iter().map(|row| row.iter().map(number_text).collect()).collect();
                assert_eq!(values, vec![vec!["1", "2"], vec!["3", "4"]]);
            }
            other => panic!("expected Matrix, got {other:?}"),
        }

        let node = parse_expression_str("[1,2;3,4;;5,6;7,8]", &NullOracle).unwrap();
        match node {
            Node::Tensor(t) => {
                assert_eq!(t.max_dimension, 3);
                assert_eq!(t.structure.iter().map(|e| e.separator_level).collect::<Vec<_>>(), vec![1, 2, 1, 0]);
            }
            other => panic!("expected Tensor, got {other:?}"),
        }
    }

    #[test]
    fn set_map_and_system_from_spec_examples() {
        assert!(matches!(parse_expression_str("{3,5,6}", &NullOracle).unwrap(), Node::Set(_)));
        assert!(matches!(parse_expression_str("{a := 4, b := 5}", &NullOracle).unwrap(), Node::Map(_)));
        assert!(matches!(parse_expression_str("{x :=: 3*x + 2; y :=: x}", &NullOracle).unwrap(), Node::System(_)));
    }

    #[test]
    fn nested_code_blocks_from_spec_example() {
        let node = parse_expression_str("{{ a := {{ 3 }} }}", &NullOracle).unwrap();
        match node {
            Node::CodeBlock(outer) => {
                assert_eq!(outer.statements.len(), 1);
                match &outer.statements[0] {
                    Node::BinaryOperation(bin) => assert!(matches!(*bin.right, Node::CodeBlock(_))),
                    other => panic!("expected BinaryOperation, got {other:?}"),
                }
            }
            other => panic!("expected CodeBlock, got {other:?}"),
        }
    }

    #[test]
    fn embedded_language_header_from_spec_example() {
        let node = parse_expression_str("`P(x):x^2 + 3x + 5`", &NullOracle).unwrap();
        match node {
            Node::EmbeddedLanguage(e) => {
                assert_eq!(e.language, "P");
                assert_eq!(e.context.as_deref(), Some("x"));
                assert_eq!(e.body, "x^2 + 3x + 5");
            }
            other => panic!("expected EmbeddedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn consecutive_commas_error_from_spec_example() {
        let err = parse_expression_str("(3,, 2)", &NullOracle).unwrap_err();
        assert!(matches!(err.kind, rix_errors::ParseErrorKind::ConsecutiveCommas));
    }

    #[test]
    fn pattern_matching_with_brace_syntax_errors() {
        let err = parse_expression_str("{f :=> [(x) -> x]}", &NullOracle).unwrap_err();
        assert!(matches!(err.kind, rix_errors::ParseErrorKind::PatternMatchingNeedsArraySyntax));
    }

    fn number_text(node: &Node) -> &str {
        match node {
            Node::Number(n) => n.value.as_str(),
            other => panic!("expected Number, got {other:?}"),
        }
    }
}
