//! The Pratt engine (§4.1) plus the prefix and infix dispatchers (§4.2,
//! §4.1's "special infix fast-paths") that feed it. This is the core loop
//! every other parser module bottoms out in: brackets recurse back into
//! [`parse_expression`] for their element lists, and [`parse_expression`]
//! recurses into brackets/calculus/embedded for leaf and postfix forms.

use crate::context::ParserContext;
use crate::oracle::{self, SystemSymbolOracle};
use crate::token::{IdentifierKind, Token, TokenKind, TokenStringKind};
use crate::{brackets, calculus, embedded, params, symbol_table};
use rix_ast::{
    Associativity, BinaryOperation, EmbeddedLanguage, Fixity, FunctionCall, Node, NullLiteral, NumberLiteral, Pipe, PipeKind,
    PlaceHolder, PropertyAccess, StringKind, StringLiteral, SystemIdentifier, UnaryOperation, UserIdentifier,
};
use rix_errors::{ParseError, Result};

/// `parseExpression(minPrecedence) -> Node` (§4.1): parses a prefix form,
/// then folds in infix/postfix continuations whose binding power is at
/// least `min_precedence`.
pub fn parse_expression<O: SystemSymbolOracle>(p: &mut ParserContext<O>, min_precedence: u16) -> Result<Node> {
    let mut left = parse_prefix(p)?;
    loop {
        let Some((prec, assoc, kind)) = current_infix(p, &left) else { break };
        if prec < min_precedence {
            break;
        }
        left = apply_infix(p, left, prec, assoc, kind)?;
    }
    Ok(left)
}

/// Builds the identifier leaf for `token`: a `SystemIdentifier` carrying
/// whatever the oracle reports for System-kind identifiers, otherwise a
/// plain `UserIdentifier`. Exposed for the calculus parser, which builds
/// bare identifier nodes for integral function names and derivative
/// variable lists without re-entering the full expression grammar.
pub fn build_identifier_node<O: SystemSymbolOracle>(p: &ParserContext<O>, token: Token) -> Node {
    match token.identifier_kind {
        Some(IdentifierKind::System) => {
            let system_info = p.oracle_lookup(&token.value);
            Node::SystemIdentifier(SystemIdentifier { name: token.value, system_info, span: token.pos, original: token.original })
        }
        _ => Node::UserIdentifier(UserIdentifier { name: token.value, span: token.pos, original: token.original }),
    }
}

fn parse_prefix<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Node> {
    let tok = p.token().clone();
    match tok.kind {
        TokenKind::Number => {
            p.bump();
            Ok(Node::Number(NumberLiteral { value: tok.value, span: tok.pos, original: tok.original }))
        }
        TokenKind::String => parse_string_prefix(p, tok),
        TokenKind::PlaceHolder => {
            p.bump();
            Ok(Node::PlaceHolder(PlaceHolder { place: tok.place.unwrap_or(0), span: tok.pos, original: tok.original }))
        }
        TokenKind::Identifier => parse_identifier_prefix(p, tok),
        TokenKind::Symbol => parse_symbol_prefix(p, tok),
        TokenKind::SemicolonSequence | TokenKind::End => Err(ParseError::unexpected_prefix(tok.original, tok.pos)),
    }
}

fn parse_string_prefix<O: SystemSymbolOracle>(p: &mut ParserContext<O>, tok: Token) -> Result<Node> {
    match tok.string_kind {
        Some(TokenStringKind::Quote) => {
            p.bump();
            Ok(Node::String(StringLiteral { value: tok.value, kind: StringKind::Quote, span: tok.pos, original: tok.original }))
        }
        Some(TokenStringKind::Backtick) => {
            p.bump();
            let header = embedded::parse_header(&tok.value, tok.pos)?;
            Ok(Node::EmbeddedLanguage(EmbeddedLanguage {
                language: header.language,
                context: header.context,
                body: header.body,
                span: tok.pos,
                original: tok.original,
            }))
        }
        // Comment tokens are expression terminators (§4.1); they never enter
        // the prefix dispatcher through a well-formed `parse_expression`
        // call — only `statement::parse_top_level_item` consumes them.
        _ => Err(ParseError::unexpected_prefix(tok.original, tok.pos)),
    }
}

fn parse_identifier_prefix<O: SystemSymbolOracle>(p: &mut ParserContext<O>, tok: Token) -> Result<Node> {
    if tok.value == "_" && tok.identifier_kind == Some(IdentifierKind::User) {
        p.bump();
        return Ok(Node::Null(NullLiteral { span: tok.pos, original: tok.original }));
    }

    if tok.identifier_kind == Some(IdentifierKind::System) {
        let info = p.oracle_lookup(&tok.value);
        if let Some(op) = &info.operator {
            if op.fixity == Fixity::Prefix {
                let (prec, _assoc, _fixity) = oracle::operator_binding(op);
                p.bump();
                let operand = parse_expression(p, prec)?;
                let span = tok.pos.merge(operand.span());
                let original = p.text(span);
                return Ok(Node::UnaryOperation(UnaryOperation { operator: tok.value, operand: Box::new(operand), span, original }));
            }
        }
    }

    p.bump();
    Ok(build_identifier_node(p, tok))
}

fn parse_symbol_prefix<O: SystemSymbolOracle>(p: &mut ParserContext<O>, tok: Token) -> Result<Node> {
    match tok.value.as_str() {
        "(" => brackets::parse_parenthesized(p),
        "[" => brackets::parse_square_bracket(p),
        "{{" => brackets::parse_double_curly(p),
        "{" => brackets::parse_curly_brace(p),
        "'" => calculus::parse_integral(p),
        "-" | "+" => {
            p.bump();
            let operand = parse_expression(p, symbol_table::LEVEL_PREFIX)?;
            let span = tok.pos.merge(operand.span());
            let original = p.text(span);
            Ok(Node::UnaryOperation(UnaryOperation { operator: tok.value, operand: Box::new(operand), span, original }))
        }
        _ => Err(ParseError::unexpected_prefix(tok.original, tok.pos)),
    }
}

/// What the infix dispatcher should do once the Pratt loop has decided to
/// consume the current token.
enum InfixKind {
    Call,
    Index,
    Derivative,
    DotProperty,
    Operator(String),
}

fn derivative_eligible(node: &Node) -> bool {
    matches!(
        node,
        Node::UserIdentifier(_) | Node::SystemIdentifier(_) | Node::FunctionCall(_) | Node::PropertyAccess(_) | Node::Derivative(_) | Node::Integral(_)
    )
}

/// Looks at the current token and decides whether/how the Pratt loop
/// should continue, without consuming anything. Checks the §4.1 special
/// fast-paths (call, index, derivative, dot-property) before falling back
/// to the static table and the oracle.
fn current_infix<O: SystemSymbolOracle>(p: &ParserContext<O>, left: &Node) -> Option<(u16, Associativity, InfixKind)> {
    let tok = p.token();
    match tok.kind {
        TokenKind::Symbol => match tok.value.as_str() {
            "(" => Some((symbol_table::LEVEL_POSTFIX, Associativity::Left, InfixKind::Call)),
            "[" => Some((symbol_table::LEVEL_POSTFIX, Associativity::Left, InfixKind::Index)),
            "'" if derivative_eligible(left) => Some((symbol_table::LEVEL_PRIME, Associativity::Left, InfixKind::Derivative)),
            "." => Some((symbol_table::LEVEL_PROPERTY, Associativity::Left, InfixKind::DotProperty)),
            _ => symbol_table::infix_binding(&tok.value).map(|(prec, assoc)| (prec, assoc, InfixKind::Operator(tok.value.clone()))),
        },
        TokenKind::Identifier if tok.identifier_kind == Some(IdentifierKind::System) => {
            let info = p.oracle_lookup(&tok.value);
            info.operator.as_ref().filter(|op| op.fixity == Fixity::Infix).map(|op| {
                let (prec, assoc, _fixity) = oracle::operator_binding(op);
                (prec, assoc, InfixKind::Operator(tok.value.clone()))
            })
        }
        _ => None,
    }
}

fn apply_infix<O: SystemSymbolOracle>(p: &mut ParserContext<O>, left: Node, prec: u16, assoc: Associativity, kind: InfixKind) -> Result<Node> {
    match kind {
        InfixKind::Call => parse_call(p, left),
        InfixKind::Index => parse_index(p, left),
        InfixKind::Derivative => calculus::parse_derivative(p, left),
        InfixKind::DotProperty => parse_dot_property(p, left),
        InfixKind::Operator(op) => {
            p.bump();
            let next_min = match assoc {
                Associativity::Left => prec + 1,
                Associativity::Right => prec,
            };
            let right = parse_expression(p, next_min)?;
            build_infix_node(p, op, left, right)
        }
    }
}

fn build_infix_node<O: SystemSymbolOracle>(p: &ParserContext<O>, op: String, left: Node, right: Node) -> Result<Node> {
    let span = left.span().merge(right.span());
    let original = p.text(span);

    if symbol_table::is_arrow(&op) {
        return crate::arrow::lower(&op, left, right, span, original);
    }

    if symbol_table::PIPE_OPS.contains(&op.as_str()) {
        let kind = PipeKind::from_symbol(&op);
        return Ok(Node::Pipe(Pipe { kind, left: Box::new(left), right: Box::new(right), span, original }));
    }

    Ok(Node::BinaryOperation(BinaryOperation { operator: op, left: Box::new(left), right: Box::new(right), span, original }))
}

/// The postfix call fast-path (§4.1): `(` right after any already-parsed
/// expression is a call, never a grouping. Works uniformly for bare
/// identifiers, property access, and chained calls (`f(x)(y)`) alike, since
/// `FunctionCall.function` is a general `Node`, not restricted to a name.
fn parse_call<O: SystemSymbolOracle>(p: &mut ParserContext<O>, left: Node) -> Result<Node> {
    let open_span = p.token().pos;
    p.bump();
    let (elements, first_keyword_index) = params::parse_bracketed_elements(p, ")")?;
    let close_span = p.expect_closing(")", open_span)?;
    let span = left.span().merge(close_span);
    let original = p.text(span);
    let arguments = params::build_arguments(elements, first_keyword_index)?;
    Ok(Node::FunctionCall(FunctionCall { function: Box::new(left), arguments, span, original }))
}

/// The postfix property-access fast-path: `object[property]`.
fn parse_index<O: SystemSymbolOracle>(p: &mut ParserContext<O>, left: Node) -> Result<Node> {
    let open_span = p.token().pos;
    p.bump();
    let property = parse_expression(p, 0)?;
    let close_span = p.expect_closing("]", open_span)?;
    let span = left.span().merge(close_span);
    let original = p.text(span);
    Ok(Node::PropertyAccess(PropertyAccess { object: Box::new(left), property: Box::new(property), span, original }))
}

/// `.` property access at the tightest binding level (130): `object.name`.
fn parse_dot_property<O: SystemSymbolOracle>(p: &mut ParserContext<O>, left: Node) -> Result<Node> {
    p.bump();
    let name_tok = p.expect_identifier()?;
    let property = build_identifier_node(p, name_tok);
    let span = left.span().merge(property.span());
    let original = p.text(span);
    Ok(Node::PropertyAccess(PropertyAccess { object: Box::new(left), property: Box::new(property), span, original }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NullOracle;
    use crate::parse_expression_str;

    #[test]
    fn precedence_climbs_multiplication_over_addition() {
        let node = parse_expression_str("1 + 2 * 3", &NullOracle).unwrap();
        match node {
            Node::BinaryOperation(bin) => {
                assert_eq!(bin.operator, "+");
                assert!(matches!(*bin.right, Node::BinaryOperation(ref inner) if inner.operator == "*"));
            }
            other => panic!("expected BinaryOperation, got {other:?}"),
        }
    }

    #[test]
    fn power_is_right_associative() {
        let node = parse_expression_str("2 ^ 3 ^ 2", &NullOracle).unwrap();
        match node {
            Node::BinaryOperation(bin) => {
                assert_eq!(bin.operator, "^");
                assert!(matches!(*bin.right, Node::BinaryOperation(ref inner) if inner.operator == "^"));
            }
            other => panic!("expected BinaryOperation, got {other:?}"),
        }
    }

    #[test]
    fn bare_underscore_is_null() {
        let node = parse_expression_str("_", &NullOracle).unwrap();
        assert!(matches!(node, Node::Null(_)));
    }

    #[test]
    fn placeholder_literal() {
        let node = parse_expression_str("_2", &NullOracle).unwrap();
        assert!(matches!(node, Node::PlaceHolder(ph) if ph.place == 2));
    }

    #[test]
    fn call_chains_after_property_access() {
        let node = parse_expression_str("a[0](1)", &NullOracle).unwrap();
        match node {
            Node::FunctionCall(call) => assert!(matches!(*call.function, Node::PropertyAccess(_))),
            other => panic!("expected FunctionCall, got {other:?}"),
        }
    }

    #[test]
    fn dot_property_access() {
        let node = parse_expression_str("point.x", &NullOracle).unwrap();
        match node {
            Node::PropertyAccess(access) => assert!(matches!(*access.property, Node::UserIdentifier(ref id) if id.name == "x")),
            other => panic!("expected PropertyAccess, got {other:?}"),
        }
    }

    #[test]
    fn explicit_pipe_with_placeholders() {
        let node = parse_expression_str("(3,4) ||> f(_2,_1)", &NullOracle).unwrap();
        match node {
            Node::Pipe(pipe) => {
                assert!(matches!(pipe.kind, PipeKind::Explicit));
                assert!(matches!(*pipe.left, Node::Tuple(_)));
                assert!(matches!(*pipe.right, Node::FunctionCall(_)));
            }
            other => panic!("expected Pipe, got {other:?}"),
        }
    }
}
