use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

/// Wraps exactly one expression that was terminated by `;`. Appears only
/// at top level or inside a [`crate::collections::CodeBlock`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Statement {
    pub expression: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Statement);

/// A standalone comment, emitted in place rather than attached to a
/// neighboring node.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Comment {
    pub value: String,
    pub kind: String,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Comment);
