//! Bracket disambiguation (§4.3): the same bracket shape means different
//! things depending on what is found inside it.

use crate::context::ParserContext;
use crate::oracle::SystemSymbolOracle;
use crate::symbol_table;
use crate::token::TokenKind;
use indexmap::IndexMap;
use rix_ast::{Array, Grouping, MapLiteral, Matrix, Node, ParameterListNode, SetLiteral, SystemLiteral, Tensor, TensorEntry, Tuple, WithMetadata};
use rix_errors::{ParseError, Result};

/// Scans forward from the current token (assumed to be the just-consumed
/// open bracket's first content token) to find whether the pair contains a
/// top-level `;`/`,`, without consuming anything. Nested brackets are
/// skipped over; the first depth-zero closer ends the scan — sound because
/// callers only invoke this immediately after consuming a matching opener.
fn scan_balanced<O: SystemSymbolOracle>(p: &ParserContext<O>) -> (bool, bool) {
    let mut depth = 0i32;
    let mut dist = 0usize;
    let mut saw_semicolon = false;
    let mut saw_comma = false;
    loop {
        let (kind, value) = p.look_ahead(dist, |t| (t.kind, t.value.clone()));
        match kind {
            TokenKind::End => return (saw_semicolon, saw_comma),
            TokenKind::SemicolonSequence if depth == 0 => saw_semicolon = true,
            TokenKind::Symbol => match value.as_str() {
                "(" | "[" | "{" | "{{" => depth += 1,
                ")" | "]" | "}" | "}}" => {
                    if depth == 0 {
                        return (saw_semicolon, saw_comma);
                    }
                    depth -= 1;
                }
                ";" if depth == 0 => saw_semicolon = true,
                "," if depth == 0 => saw_comma = true,
                _ => {}
            },
            _ => {}
        }
        dist += 1;
    }
}

fn metadata_key<O: SystemSymbolOracle>(_p: &ParserContext<O>, node: &Node) -> Result<String> {
    match node {
        Node::UserIdentifier(id) => Ok(id.name.clone()),
        Node::SystemIdentifier(id) => Ok(id.name.clone()),
        Node::String(s) => Ok(s.value.clone()),
        other => Err(ParseError::metadata_key_must_be_identifier_or_string(other.span())),
    }
}

/// `(` ... `)`: empty tuple, parameter list, comma tuple, or a grouped
/// single expression.
pub fn parse_parenthesized<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Node> {
    let open_span = p.token().pos;
    p.bump();

    if p.check_symbol(")") {
        let close_span = p.token().pos;
        p.bump();
        let span = open_span.merge(close_span);
        return Ok(Node::Tuple(Tuple { elements: vec![], original: p.text(span), span }));
    }

    let (has_semicolon, has_comma) = scan_balanced(p);

    if has_semicolon {
        let (elements, first_keyword_index) = crate::params::parse_bracketed_elements(p, ")")?;
        let close_span = p.expect_closing(")", open_span)?;
        let span = open_span.merge(close_span);
        let parameters = crate::params::build_parameters(elements, first_keyword_index)?;
        let inner_span = span;
        let param_list = Node::ParameterList(ParameterListNode { parameters, span: inner_span, original: p.text(inner_span) });
        return Ok(Node::Grouping(Grouping { expression: Box::new(param_list), original: p.text(span), span }));
    }

    if has_comma {
        let (elements, _) = crate::params::parse_bracketed_elements(p, ")")?;
        let close_span = p.expect_closing(")", open_span)?;
        let span = open_span.merge(close_span);
        return Ok(Node::Tuple(Tuple { elements, original: p.text(span), span }));
    }

    let expr = crate::expression::parse_expression(p, 0)?;
    let close_span = p.expect_closing(")", open_span)?;
    let span = open_span.merge(close_span);
    Ok(Node::Grouping(Grouping { expression: Box::new(expr), original: p.text(span), span }))
}

/// `[` ... `]`: array, matrix, tensor, or array-with-metadata, decided by
/// element inspection as parsing proceeds (§9: "always begins optimistically
/// as an array").
pub fn parse_square_bracket<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Node> {
    let open_span = p.token().pos;
    p.bump();

    let mut elements: Vec<Node> = Vec::new();
    let mut metadata: IndexMap<String, Node> = IndexMap::new();
    let mut first_non_meta: Option<Node> = None;
    let mut non_meta_count = 0usize;
    let mut saw_metadata = false;

    let mut current_row: Vec<Node> = Vec::new();
    let mut rows: Vec<Vec<Node>> = Vec::new();
    let mut separator_levels: Vec<u32> = Vec::new();
    let mut saw_semicolon = false;
    let mut max_level = 0u32;

    loop {
        if p.check_symbol("]") {
            break;
        }

        let at_separator = p.check_symbol(";") || p.check_symbol(",") || p.token().kind == TokenKind::SemicolonSequence;
        if !at_separator {
            let expr = crate::expression::parse_expression(p, 0)?;
            match expr {
                Node::BinaryOperation(bin) if bin.operator == ":=" => {
                    saw_metadata = true;
                    let key = metadata_key(p, &bin.left)?;
                    metadata.insert(key, *bin.right);
                }
                other => {
                    non_meta_count += 1;
                    if first_non_meta.is_none() {
                        first_non_meta = Some(other.clone());
                    }
                    current_row.push(other.clone());
                    elements.push(other);
                }
            }
        }

        if p.check_symbol("]") {
            break;
        }
        if p.eat_symbol(",") {
            if p.check_symbol(",") {
                return Err(ParseError::consecutive_commas(p.token().pos));
            }
            continue;
        }
        if p.eat_symbol(";") {
            saw_semicolon = true;
            max_level = max_level.max(1);
            rows.push(std::mem::take(&mut current_row));
            separator_levels.push(1);
            continue;
        }
        if p.token().kind == TokenKind::SemicolonSequence {
            let level = p.token().count.unwrap_or(2);
            p.bump();
            saw_semicolon = true;
            max_level = max_level.max(level);
            rows.push(std::mem::take(&mut current_row));
            separator_levels.push(level);
            continue;
        }
        break;
    }
    rows.push(current_row);

    let close_span = p.expect_closing("]", open_span)?;
    let span = open_span.merge(close_span);
    let original = p.text(span);

    if saw_metadata && saw_semicolon {
        return Err(ParseError::cannot_mix_matrix_with_metadata(span));
    }

    if saw_metadata {
        if non_meta_count > 1 {
            return Err(ParseError::cannot_mix_array_elements_with_metadata(span));
        }
        let primary = first_non_meta.unwrap_or_else(|| Node::Array(Array { elements: vec![], span, original: original.clone() }));
        return Ok(Node::WithMetadata(WithMetadata { primary: Box::new(primary), metadata, span, original }));
    }

    if saw_semicolon {
        if max_level == 1 {
            return Ok(Node::Matrix(Matrix { rows, span, original }));
        }
        let mut structure = Vec::new();
        let last_index = rows.len().saturating_sub(1);
        for (i, row) in rows.into_iter().enumerate() {
            let level = if i == last_index { 0 } else { separator_levels.get(i).copied().unwrap_or(0) };
            structure.push(TensorEntry { row, separator_level: level });
        }
        return Ok(Node::Tensor(Tensor { structure, max_dimension: max_level + 1, span, original }));
    }

    Ok(Node::Array(Array { elements, span, original }))
}

/// `{` ... `}`: set, map, or system of equations, classified by the shape
/// of its parsed elements (§9: "the curly-brace classifier inspects the
/// parsed elements").
pub fn parse_curly_brace<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Node> {
    let open_span = p.token().pos;
    p.bump();

    if p.check_symbol("}") {
        let close_span = p.token().pos;
        p.bump();
        let span = open_span.merge(close_span);
        return Ok(Node::Set(SetLiteral { elements: vec![], original: p.text(span), span }));
    }

    let mut elements = Vec::new();
    let mut saw_comma = false;
    let mut saw_semicolon = false;

    loop {
        if p.check_symbol("}") {
            break;
        }
        let expr = crate::expression::parse_expression(p, 0)?;
        elements.push(expr);
        if p.check_symbol("}") {
            break;
        }
        if p.eat_symbol(",") {
            saw_comma = true;
            if p.check_symbol(",") {
                return Err(ParseError::consecutive_commas(p.token().pos));
            }
            continue;
        }
        if p.eat_symbol(";") {
            saw_semicolon = true;
            continue;
        }
        if p.token().kind == TokenKind::SemicolonSequence {
            p.bump();
            saw_semicolon = true;
            continue;
        }
        break;
    }

    let close_span = p.expect_closing("}", open_span)?;
    let span = open_span.merge(close_span);
    let original = p.text(span);

    if elements.iter().any(|e| matches!(e, Node::PatternMatchingFunction(_))) {
        return Err(ParseError::pattern_matching_needs_array_syntax(span));
    }

    let has_equation = elements.iter().any(|e| matches!(e, Node::BinaryOperation(b) if symbol_table::is_equation_op(&b.operator)));
    let has_assignment = elements.iter().any(|e| matches!(e, Node::BinaryOperation(b) if b.operator == ":="));

    if has_equation && has_assignment {
        return Err(ParseError::cannot_mix_equations(span));
    }

    if has_equation {
        if saw_comma || !saw_semicolon {
            return Err(ParseError::system_requires_semicolons(span));
        }
        if elements.iter().any(|e| !matches!(e, Node::BinaryOperation(b) if symbol_table::is_equation_op(&b.operator))) {
            return Err(ParseError::system_requires_equations_only(span));
        }
        return Ok(Node::System(SystemLiteral { elements, original, span }));
    }

    if has_assignment {
        if elements.iter().any(|e| !matches!(e, Node::BinaryOperation(b) if b.operator == ":=")) {
            return Err(ParseError::map_requires_key_value_pairs(span));
        }
        return Ok(Node::Map(MapLiteral { elements, original, span }));
    }

    Ok(Node::Set(SetLiteral { elements, original, span }))
}

/// `{{` ... `}}`: a code block of semicolon-separated statements.
pub fn parse_double_curly<O: SystemSymbolOracle>(p: &mut ParserContext<O>) -> Result<Node> {
    let open_span = p.token().pos;
    p.bump();
    let statements = crate::statement::parse_statements_until(p, "}}")?;
    let close_span = p.expect_closing("}}", open_span)?;
    let span = open_span.merge(close_span);
    Ok(Node::CodeBlock(rix_ast::CodeBlock { statements, original: p.text(span), span }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NullOracle;
    use crate::parse_expression_str;

    #[test]
    fn empty_parens_is_empty_tuple() {
        let node = parse_expression_str("()", &NullOracle).unwrap();
        assert!(matches!(node, Node::Tuple(t) if t.elements.is_empty()));
    }

    #[test]
    fn single_trailing_comma_does_not_add_an_element() {
        let node = parse_expression_str("(1,2,)", &NullOracle).unwrap();
        assert!(matches!(node, Node::Tuple(t) if t.elements.len() == 2));
    }

    #[test]
    fn metadata_only_array_preserves_empty_primary_shape() {
        let node = parse_expression_str("[note := 1]", &NullOracle).unwrap();
        match node {
            Node::WithMetadata(wm) => {
                assert!(matches!(*wm.primary, Node::Array(a) if a.elements.is_empty()));
                assert_eq!(wm.metadata.len(), 1);
            }
            other => panic!("expected WithMetadata, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_closing_paren_points_back_at_opener() {
        let err = parse_expression_str("(1 + 2", &NullOracle).unwrap_err();
        assert!(matches!(err.kind, rix_errors::ParseErrorKind::UnmatchedDelimiter { .. }));
        assert!(err.related.is_some());
    }
}
