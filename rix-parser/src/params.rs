//! Parameter / argument parsing (§4.4): formal parameter lists and
//! call-argument lists are scanned identically — a comma-separated run of
//! full expressions, with a `;` promoting everything after it to a
//! keyword section — and only diverge in how each element is interpreted
//! afterward.

use crate::context::ParserContext;
use crate::oracle::SystemSymbolOracle;
use rix_ast::{Arguments, BinaryOperation, Node, Parameter, Parameters, UserIdentifier};
use rix_errors::{ParseError, Result};
use rix_span::Span;

/// Parses the raw comma/semicolon-separated element list inside an
/// already-opened bracket. Returns the parsed elements and the index at
/// which the keyword section begins, if a `;` was seen.
pub fn parse_bracketed_elements<O: SystemSymbolOracle>(p: &mut ParserContext<O>, close: &str) -> Result<(Vec<Node>, Option<usize>)> {
    let mut elements = Vec::new();
    let mut first_keyword_index = None;

    if p.check_symbol(close) {
        return Ok((elements, first_keyword_index));
    }

    loop {
        if p.check_symbol(close) {
            break;
        }
        let expr = crate::expression::parse_expression(p, 0)?;
        elements.push(expr);

        if p.eat_symbol(",") {
            if p.check_symbol(",") {
                return Err(ParseError::consecutive_commas(p.token().pos));
            }
            continue;
        } else if p.eat_symbol(";") {
            if first_keyword_index.is_none() {
                first_keyword_index = Some(elements.len());
            }
            continue;
        } else {
            break;
        }
    }

    Ok((elements, first_keyword_index))
}

fn identifier_name(node: &Node) -> Option<&str> {
    match node {
        Node::UserIdentifier(id) => Some(&id.name),
        Node::SystemIdentifier(id) => Some(&id.name),
        _ => None,
    }
}

/// Splits a single parameter-list element into a name/default/conditional
/// triple, unwrapping the `? guard` and `:= default` layers the Pratt
/// engine already parsed as ordinary binary operators (§4.5's
/// `convertArgsToParams`).
fn add_parameter_element(params: &mut Parameters, element: Node, is_keyword: bool, span: Span) -> Result<()> {
    if let Node::BinaryOperation(bin) = &element {
        if bin.operator == "?" {
            let Node::BinaryOperation(bin) = element else { unreachable!() };
            params.conditionals.push(*bin.right);
            return add_parameter_element(params, *bin.left, is_keyword, span);
        }
    }

    if let Node::BinaryOperation(bin) = &element {
        if bin.operator == ":=" {
            let Node::BinaryOperation(bin) = element else { unreachable!() };
            let name = identifier_name(&bin.left).ok_or_else(|| ParseError::expected_parameter_name(bin.left.span()))?.to_string();
            let (default_value, conditional) = match *bin.right {
                Node::BinaryOperation(inner) if inner.operator == "?" => (*inner.left, Some(*inner.right)),
                other => (other, None),
            };
            if let Some(cond) = conditional {
                params.conditionals.push(cond);
            }
            let param = Parameter { name, default_value: Some(Box::new(default_value)) };
            if is_keyword {
                params.keyword.push(param);
            } else {
                params.positional.push(param);
            }
            return Ok(());
        }
    }

    match identifier_name(&element) {
        Some(name) => {
            let param = Parameter { name: name.to_string(), default_value: None };
            if is_keyword {
                params.keyword.push(param);
            } else {
                params.positional.push(param);
            }
            Ok(())
        }
        None => Err(ParseError::expected_parameter_name(span)),
    }
}

pub fn build_parameters(elements: Vec<Node>, first_keyword_index: Option<usize>) -> Result<Parameters> {
    let mut params = Parameters::default();
    let split = first_keyword_index.unwrap_or(elements.len());
    for (i, element) in elements.into_iter().enumerate() {
        let span = element.span();
        add_parameter_element(&mut params, element, i >= split, span)?;
    }
    for kw in &params.keyword {
        if kw.default_value.is_none() {
            return Err(ParseError::keyword_parameter_needs_default(kw.name.clone(), Span::default()));
        }
    }
    Ok(params)
}

/// Builds a call's [`Arguments`] from the same raw element list. Unlike
/// formal parameters, positional arguments are kept verbatim (even a
/// stray `name := expr` before any `;` is just an assignment-valued
/// expression, not a keyword argument — see §4.4).
pub fn build_arguments(elements: Vec<Node>, first_keyword_index: Option<usize>) -> Result<Arguments> {
    let mut args = Arguments::default();
    let split = first_keyword_index.unwrap_or(elements.len());
    for (i, element) in elements.into_iter().enumerate() {
        if i < split {
            args.positional.push(element);
            continue;
        }
        match element {
            Node::BinaryOperation(bin) if bin.operator == ":=" => {
                let name = identifier_name(&bin.left).ok_or_else(|| ParseError::expected_parameter_name(bin.left.span()))?.to_string();
                args.keyword.insert(name, *bin.right);
            }
            other => match identifier_name(&other) {
                Some(name) => {
                    let name = name.to_string();
                    args.keyword.insert(name, other);
                }
                None => return Err(ParseError::unexpected_token("`name` or `name := expr`", other.original().to_string(), other.span())),
            },
        }
    }
    Ok(args)
}

/// Reinterprets a parsed call's arguments as a parameter specification
/// (§4.5 `convertArgsToParams`), used when `:->`/`:=>` lowers a
/// `FunctionCall` head into a `FunctionDefinition`/`PatternMatchingFunction`.
/// Keyword arguments are rebuilt as `name := value` elements (shorthand
/// arguments are left bare, which then naturally fails the keyword-default
/// check below) and fed through the same per-element logic as a formal
/// parameter list, so `name := value ? cond` splits the same way in both
/// places.
pub fn convert_arguments_to_params(args: Arguments) -> Result<Parameters> {
    let mut params = Parameters::default();

    for element in args.positional {
        let span = element.span();
        add_parameter_element(&mut params, element, false, span)?;
    }

    for (name, value) in args.keyword {
        let span = value.span();
        let element = if identifier_name(&value) == Some(name.as_str()) {
            value
        } else {
            let key = Node::UserIdentifier(UserIdentifier { name: name.clone(), span, original: name.clone() });
            Node::BinaryOperation(BinaryOperation { operator: ":=".to_string(), left: Box::new(key), right: Box::new(value), span, original: String::new() })
        };
        add_parameter_element(&mut params, element, true, span)?;
    }

    for kw in &params.keyword {
        if kw.default_value.is_none() {
            return Err(ParseError::keyword_parameter_needs_default(kw.name.clone(), Span::default()));
        }
    }

    Ok(params)
}
