//! Arrow lowering (§4.5): `->`, `:->`, and `:=>` are parsed as ordinary
//! infix operators by the Pratt engine, then the already-built left operand
//! is retroactively reinterpreted as a parameter specification here.

use indexmap::IndexMap;
use rix_ast::{BinaryOperation, FunctionDefinition, FunctionLambda, Grouping, Node, Parameter, Parameters, Pattern, PatternMatchingFunction};
use rix_errors::{ParseError, Result};
use rix_span::Span;

pub fn lower(op: &str, left: Node, right: Node, span: Span, original: String) -> Result<Node> {
    match op {
        ":->" => lower_function_definition(left, right, span, original),
        "->" => Ok(lower_lambda(left, right, span, original)),
        ":=>" => lower_pattern_matching(left, right, span, original),
        other => unreachable!("arrow::lower called with non-arrow operator `{other}`"),
    }
}

fn identifier_name(node: &Node) -> Option<String> {
    match node {
        Node::UserIdentifier(id) => Some(id.name.clone()),
        Node::SystemIdentifier(id) => Some(id.name.clone()),
        _ => None,
    }
}

/// `name(params...) :-> body`: the left operand must be a `FunctionCall`
/// whose arguments are reinterpreted as a parameter spec (§4.5).
fn lower_function_definition(left: Node, right: Node, span: Span, original: String) -> Result<Node> {
    match left {
        Node::FunctionCall(call) => {
            let name = identifier_name(&call.function)
                .ok_or_else(|| ParseError::unexpected_token("a plain function name before `:->`", call.function.original().to_string(), call.function.span()))?;
            let parameters = crate::params::convert_arguments_to_params(call.arguments)?;
            Ok(Node::FunctionDefinition(FunctionDefinition { name, parameters, body: Box::new(right), span, original }))
        }
        other => Err(ParseError::unexpected_token("a function call (`name(params)`) before `:->`", other.original().to_string(), other.span())),
    }
}

/// `(params...) -> body`: the left operand may be one of a handful of
/// recognized shapes (§4.5); anything else falls back to a plain
/// `BinaryOperation("->", ...)`.
fn lower_lambda(left: Node, right: Node, span: Span, original: String) -> Node {
    match left {
        Node::Grouping(g) => lower_grouped_lambda(*g.expression, g.span, g.original, right, span, original),
        Node::Tuple(tuple) => {
            if !tuple.elements.is_empty() && tuple.elements.iter().all(|e| matches!(e, Node::UserIdentifier(_) | Node::SystemIdentifier(_))) {
                let mut parameters = Parameters::default();
                for element in tuple.elements {
                    let name = match identifier_name(&element) {
                        Some(name) => name,
                        None => unreachable!("checked by the all() guard above"),
                    };
                    parameters.positional.push(Parameter { name, default_value: None });
                }
                Node::FunctionLambda(FunctionLambda { parameters, body: Box::new(right), span, original })
            } else {
                fallback_arrow(Node::Tuple(tuple), right, span, original)
            }
        }
        other => fallback_arrow(other, right, span, original),
    }
}

fn lower_grouped_lambda(inner: Node, group_span: Span, group_original: String, right: Node, span: Span, original: String) -> Node {
    match inner {
        Node::ParameterList(param_list) => Node::FunctionLambda(FunctionLambda { parameters: param_list.parameters, body: Box::new(right), span, original }),
        Node::UserIdentifier(id) => single_positional_lambda(id.name, None, right, span, original),
        Node::SystemIdentifier(id) => single_positional_lambda(id.name, None, right, span, original),
        Node::BinaryOperation(bin) if bin.operator == "?" => match identifier_name(&bin.left) {
            Some(name) => single_positional_lambda(name, Some(*bin.right), right, span, original),
            None => {
                let regrouped = Node::Grouping(Grouping { expression: Box::new(Node::BinaryOperation(bin)), span: group_span, original: group_original });
                fallback_arrow(regrouped, right, span, original)
            }
        },
        other => {
            let regrouped = Node::Grouping(Grouping { expression: Box::new(other), span: group_span, original: group_original });
            fallback_arrow(regrouped, right, span, original)
        }
    }
}

fn single_positional_lambda(name: String, conditional: Option<Node>, body: Node, span: Span, original: String) -> Node {
    let mut parameters = Parameters::default();
    parameters.positional.push(Parameter { name, default_value: None });
    if let Some(cond) = conditional {
        parameters.conditionals.push(cond);
    }
    Node::FunctionLambda(FunctionLambda { parameters, body: Box::new(body), span, original })
}

fn fallback_arrow(left: Node, right: Node, span: Span, original: String) -> Node {
    Node::BinaryOperation(BinaryOperation { operator: "->".to_string(), left: Box::new(left), right: Box::new(right), span, original })
}

/// `name :=> [ (params) -> body, ... ]` (optionally `name(params) :=> ...`).
fn lower_pattern_matching(left: Node, right: Node, span: Span, original: String) -> Result<Node> {
    let (name, parameters) = pattern_head(left)?;
    let (elements, metadata) = extract_pattern_elements(right)?;

    let mut patterns = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            Node::FunctionLambda(lambda) => patterns.push(Pattern { parameters: lambda.parameters, body: lambda.body }),
            other => return Err(ParseError::unexpected_token("an arrow-lambda (`(params) -> body`)", other.original().to_string(), other.span())),
        }
    }

    Ok(Node::PatternMatchingFunction(PatternMatchingFunction { name, parameters, patterns, metadata, span, original }))
}

fn pattern_head(left: Node) -> Result<(String, Parameters)> {
    match left {
        Node::UserIdentifier(id) => Ok((id.name, Parameters::default())),
        Node::SystemIdentifier(id) => Ok((id.name, Parameters::default())),
        Node::FunctionCall(call) => {
            let name = identifier_name(&call.function)
                .ok_or_else(|| ParseError::unexpected_token("a plain function name before `:=>`", call.function.original().to_string(), call.function.span()))?;
            let parameters = crate::params::convert_arguments_to_params(call.arguments)?;
            Ok((name, parameters))
        }
        other => Err(ParseError::unexpected_token("a name or function call before `:=>`", other.original().to_string(), other.span())),
    }
}

/// The three shapes the right side of `:=>` may take (§9 open question,
/// replicated literally rather than normalized away): a plain array, an
/// array wrapped in `WithMetadata`, or an array nested one level inside
/// another array.
fn extract_pattern_elements(node: Node) -> Result<(Vec<Node>, IndexMap<String, Node>)> {
    match node {
        Node::Array(arr) => Ok((unwrap_nested_array(arr.elements), IndexMap::new())),
        Node::WithMetadata(wm) => match *wm.primary {
            Node::Array(arr) => Ok((unwrap_nested_array(arr.elements), wm.metadata)),
            Node::FunctionLambda(lambda) => Ok((vec![Node::FunctionLambda(lambda)], wm.metadata)),
            other => Err(ParseError::unexpected_token("an array of arrow-lambdas", other.original().to_string(), other.span())),
        },
        Node::FunctionLambda(lambda) => Ok((vec![Node::FunctionLambda(lambda)], IndexMap::new())),
        other => Err(ParseError::unexpected_token("an array of arrow-lambdas after `:=>`", other.original().to_string(), other.span())),
    }
}

fn unwrap_nested_array(elements: Vec<Node>) -> Vec<Node> {
    if elements.len() == 1 {
        if let Node::Array(inner) = &elements[0] {
            return inner.elements.clone();
        }
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NullOracle;
    use crate::parse_expression_str;

    #[test]
    fn named_function_definition() {
        let node = parse_expression_str("f(x) :-> x + 1", &NullOracle).unwrap();
        match node {
            Node::FunctionDefinition(def) => {
                assert_eq!(def.name, "f");
                assert_eq!(def.parameters.positional.len(), 1);
                assert_eq!(def.parameters.positional[0].name, "x");
            }
            other => panic!("expected FunctionDefinition, got {other:?}"),
        }
    }

    #[test]
    fn lambda_with_keyword_defaults() {
        let node = parse_expression_str("(x, n := 5; a := 0) -> (x-a)^n + 1", &NullOracle).unwrap();
        match node {
            Node::FunctionLambda(lambda) => {
                assert_eq!(lambda.parameters.positional.len(), 2);
                assert_eq!(lambda.parameters.keyword.len(), 1);
                assert_eq!(lambda.parameters.keyword[0].name, "a");
            }
            other => panic!("expected FunctionLambda, got {other:?}"),
        }
    }

    #[test]
    fn single_identifier_lambda() {
        let node = parse_expression_str("(x) -> x + 1", &NullOracle).unwrap();
        match node {
            Node::FunctionLambda(lambda) => {
                assert_eq!(lambda.parameters.positional.len(), 1);
                assert_eq!(lambda.parameters.positional[0].name, "x");
            }
            other => panic!("expected FunctionLambda, got {other:?}"),
        }
    }

    #[test]
    fn conditional_lambda() {
        let node = parse_expression_str("(x ? x<0) -> -x", &NullOracle).unwrap();
        match node {
            Node::FunctionLambda(lambda) => {
                assert_eq!(lambda.parameters.positional[0].name, "x");
                assert_eq!(lambda.parameters.conditionals.len(), 1);
            }
            other => panic!("expected FunctionLambda, got {other:?}"),
        }
    }

    #[test]
    fn tuple_parameter_lambda() {
        let node = parse_expression_str("(x, y) -> x + y", &NullOracle).unwrap();
        match node {
            Node::FunctionLambda(lambda) => assert_eq!(lambda.parameters.positional.len(), 2),
            other => panic!("expected FunctionLambda, got {other:?}"),
        }
    }

    #[test]
    fn pattern_matching_function_with_conditionals() {
        let node = parse_expression_str("g :=> [(x ? x<0) -> -x, (x) -> x]", &NullOracle).unwrap();
        match node {
            Node::PatternMatchingFunction(pmf) => {
                assert_eq!(pmf.name, "g");
                assert_eq!(pmf.patterns.len(), 2);
                assert_eq!(pmf.patterns[0].parameters.conditionals.len(), 1);
                assert!(pmf.patterns[1].parameters.conditionals.is_empty());
            }
            other => panic!("expected PatternMatchingFunction, got {other:?}"),
        }
    }

    #[test]
    fn non_lambda_shape_falls_back_to_binary_operation() {
        let node = parse_expression_str("3 -> 4", &NullOracle).unwrap();
        assert!(matches!(node, Node::BinaryOperation(bin) if bin.operator == "->"));
    }

    #[test]
    fn shorthand_keyword_without_default_is_rejected() {
        let err = parse_expression_str("f(x; y) :-> y", &NullOracle).unwrap_err();
        assert!(matches!(err.kind, rix_errors::ParseErrorKind::KeywordParameterNeedsDefault { .. }));
    }
}
