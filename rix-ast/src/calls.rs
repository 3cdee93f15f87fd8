use crate::node::{simple_node_impl, Spanned};
use crate::params::Arguments;
use rix_span::Span;

/// `function(positional..., keyword...)` — the postfix call form.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FunctionCall {
    pub function: Box<crate::Node>,
    pub arguments: Arguments,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(FunctionCall);

/// `object[property]`, the postfix access form.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PropertyAccess {
    pub object: Box<crate::Node>,
    pub property: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(PropertyAccess);
