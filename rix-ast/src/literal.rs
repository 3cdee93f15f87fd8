use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

/// A numeric literal preserved verbatim — the parser does not interpret the
/// digits, it only records the text the tokenizer handed it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NumberLiteral {
    pub value: String,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(NumberLiteral);

/// The lexical subkind of a non-backtick string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum StringKind {
    Quote,
    Comment,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StringLiteral {
    pub value: String,
    pub kind: StringKind,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(StringLiteral);

/// `_k`, the k-th positional element of an explicit-pipe source tuple.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlaceHolder {
    pub place: i64,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(PlaceHolder);

/// The bare underscore, a null/hole symbol distinct from a placeholder.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NullLiteral {
    pub span: Span,
    pub original: String,
}
simple_node_impl!(NullLiteral);
