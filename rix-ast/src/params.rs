use indexmap::IndexMap;

/// One formal parameter: a name, and an optional default value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Parameter {
    pub name: String,
    pub default_value: Option<Box<crate::Node>>,
}

/// A parsed parameter (or call-argument) list.
///
/// Invariant: every entry in `keyword` has a non-`None` `default_value`
/// once the list reaches arrow lowering — `;` promotes subsequent
/// parameters to keyword-only, and keyword-only parameters without a
/// default are a parse error (see `rix_errors::ParseErrorKind::KeywordParameterNeedsDefault`).
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Parameters {
    pub positional: Vec<Parameter>,
    pub keyword: Vec<Parameter>,
    pub conditionals: Vec<crate::Node>,
    pub metadata: IndexMap<String, crate::Node>,
}

/// `{positional: [expr], keyword: {name -> expr}}`, the shape of a
/// function-call's argument list. Keyword order is not semantically
/// preserved; `IndexMap` is used only so re-serialization is stable.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Arguments {
    pub positional: Vec<crate::Node>,
    pub keyword: IndexMap<String, crate::Node>,
}

/// The intermediate node produced when a parenthesized group contains a
/// bare `;`: a parameter list that has not yet been lowered by a
/// following arrow. If no arrow follows, this node surfaces as-is inside
/// a `Grouping`.
use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParameterListNode {
    pub parameters: Parameters,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(ParameterListNode);
