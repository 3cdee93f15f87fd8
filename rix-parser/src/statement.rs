//! Statement framing (§4.8): the top-level loop and the `{{ ... }}` body
//! loop it shares with `brackets::parse_double_curly`.

use crate::context::ParserContext;
use crate::oracle::SystemSymbolOracle;
use crate::token::{TokenKind, TokenStringKind};
use rix_ast::{Comment, Node, Program, Statement};
use rix_errors::Result;

/// Parses a whole token stream into the top-level program (§6 output
/// contract): zero or more statement/comment/bare-expression nodes.
pub fn parse_program<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Program> {
    let mut statements = Vec::new();
    while p.has_next() {
        statements.push(parse_top_level_item(p)?);
    }
    Ok(statements)
}

/// Parses statements until `closer` is reached (but does not consume it),
/// for `{{ ... }}` code blocks.
pub fn parse_statements_until<O: SystemSymbolOracle>(p: &mut ParserContext<O>, closer: &str) -> Result<Vec<Node>> {
    let mut statements = Vec::new();
    while p.has_next() && !p.check_symbol(closer) {
        statements.push(parse_top_level_item(p)?);
    }
    Ok(statements)
}

/// A comment token becomes a standalone `Comment`, never wrapped. Any other
/// expression is wrapped in `Statement` when immediately followed by `;`,
/// and emitted bare otherwise.
fn parse_top_level_item<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Node> {
    if p.token().kind == TokenKind::String && p.token().string_kind == Some(TokenStringKind::Comment) {
        let tok = p.token().clone();
        p.bump();
        return Ok(Node::Comment(Comment { value: tok.value, kind: "comment".to_string(), span: tok.pos, original: tok.original }));
    }

    let expr = crate::expression::parse_expression(p, 0)?;
    if p.eat_symbol(";") {
        let span = expr.span().merge(p.prev_token().pos);
        let original = p.text(span);
        return Ok(Node::Statement(Statement { expression: Box::new(expr), span, original }));
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NullOracle;
    use crate::parse_program_str;

    #[test]
    fn bare_trailing_expression_is_not_wrapped() {
        let program = parse_program_str("1 + 2", &NullOracle).unwrap();
        assert_eq!(program.len(), 1);
        assert!(matches!(program[0], Node::BinaryOperation(_)));
    }

    #[test]
    fn terminated_expression_is_wrapped_in_statement() {
        let program = parse_program_str("1 + 2;", &NullOracle).unwrap();
        assert_eq!(program.len(), 1);
        assert!(matches!(program[0], Node::Statement(_)));
    }

    #[test]
    fn comments_stand_alone() {
        let program = parse_program_str("// hi\na;", &NullOracle).unwrap();
        assert_eq!(program.len(), 2);
        assert!(matches!(program[0], Node::Comment(_)));
        assert!(matches!(program[1], Node::Statement(_)));
    }

    #[test]
    fn multiple_statements() {
        let program = parse_program_str("a; b; c", &NullOracle).unwrap();
        assert_eq!(program.len(), 3);
        assert!(matches!(program[0], Node::Statement(_)));
        assert!(matches!(program[1], Node::Statement(_)));
        assert!(matches!(program[2], Node::UserIdentifier(_)));
    }
}
