use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

/// `operator operand`. `operator` is the literal surface text (`"-"`,
/// `"NOT"`, ...) rather than a closed enum, since oracle-declared prefix
/// operators are not known until parse time.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UnaryOperation {
    pub operator: String,
    pub operand: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(UnaryOperation);

/// `left operator right`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BinaryOperation {
    pub operator: String,
    pub left: Box<crate::Node>,
    pub right: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(BinaryOperation);
