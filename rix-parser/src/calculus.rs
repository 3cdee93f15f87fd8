//! Postfix derivative and prefix integral forms (§4.6).

use crate::context::ParserContext;
use crate::oracle::SystemSymbolOracle;
use rix_ast::calculus::VariableList;
use rix_ast::{Derivative, Integral, Node};
use rix_errors::{ParseError, Result};

/// `'` immediately after an identifier / function-call / property-access /
/// derivative / integral: a postfix derivative. The caller has already
/// confirmed `function`'s shape is eligible and that the current token is
/// `'`; this consumes the whole prime run.
pub fn parse_derivative<O: SystemSymbolOracle>(p: &mut ParserContext<O>, function: Node) -> Result<Node> {
    let start_span = function.span();
    let mut order = 0u32;
    while p.eat_symbol("'") {
        order += 1;
    }
    let variables = maybe_parse_variable_list(p)?;
    let (evaluation, operations) = maybe_parse_argument_list(p)?;
    let span = start_span.merge(p.prev_token().pos);
    Ok(Node::Derivative(Derivative {
        function: Box::new(function),
        order,
        variables,
        evaluation,
        operations,
        original: p.text(span),
        span,
    }))
}

/// A leading `'`: a prefix integral. The function name must follow the
/// prime run as a bare identifier.
pub fn parse_integral<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Node> {
    let start_span = p.token().pos;
    let mut order = 0u32;
    while p.eat_symbol("'") {
        order += 1;
    }
    let name_tok = p.expect_identifier().map_err(|_| ParseError::expected_function_name_after_integral(p.token().pos))?;
    let function = crate::expression::build_identifier_node(p, name_tok);
    let variables = maybe_parse_variable_list(p)?;
    let (evaluation, operations) = maybe_parse_argument_list(p)?;
    let span = start_span.merge(p.prev_token().pos);
    Ok(Node::Integral(Integral {
        function: Box::new(function),
        order,
        variables,
        evaluation,
        operations,
        metadata: rix_ast::calculus::default_integral_metadata(),
        original: p.text(span),
        span,
    }))
}

fn maybe_parse_variable_list<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Option<VariableList>> {
    if !p.eat_symbol("[") {
        return Ok(None);
    }
    let mut vars = VariableList::new();
    if !p.check_symbol("]") {
        loop {
            let tok = p.expect_identifier().map_err(|_| ParseError::expected_variable_name(p.token().pos))?;
            vars.push(crate::expression::build_identifier_node(p, tok));
            if p.check_symbol("]") {
                break;
            }
            if !p.eat_symbol(",") {
                return Err(ParseError::expected_comma_or_closing_bracket(p.token().pos));
            }
        }
    }
    if !p.eat_symbol("]") {
        return Err(ParseError::expected_closing_bracket_after_variables(p.token().pos));
    }
    Ok(Some(vars))
}

fn maybe_parse_argument_list<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<(Option<Vec<Node>>, Option<Vec<Node>>)> {
    if !p.check_symbol("(") {
        return Ok((None, None));
    }
    let open_span = p.token().pos;
    p.bump();
    let (elements, _) = crate::params::parse_bracketed_elements(p, ")")?;
    p.expect_closing(")", open_span)?;
    if elements.iter().any(|e| e.is_calculus_bearing()) {
        Ok((None, Some(elements)))
    } else {
        Ok((Some(elements), None))
    }
}
