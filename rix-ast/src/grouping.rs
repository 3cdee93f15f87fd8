use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

/// An explicit parenthesization, kept distinct from its inner expression so
/// later passes (and arrow lowering) can tell `(x)` from `x`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Grouping {
    pub expression: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Grouping);

/// Zero, one, or more comma-separated elements. Distinguished from
/// [`Grouping`] by the presence of a comma: `(x)` is a `Grouping`, `(x,)`
/// and `(x, y)` are both `Tuple`s.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Tuple {
    pub elements: Vec<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Tuple);
