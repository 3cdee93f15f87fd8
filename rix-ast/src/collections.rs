use crate::node::{simple_node_impl, Spanned};
use indexmap::IndexMap;
use rix_span::Span;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Array {
    pub elements: Vec<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Array);

/// A curly-brace container with no key-value structure and no equations.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SetLiteral {
    pub elements: Vec<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(SetLiteral);

/// A curly-brace container in which every element is a `:=` pair.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapLiteral {
    pub elements: Vec<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(MapLiteral);

/// A curly-brace container in which every element is an equation
/// (`:=:`, `:<:`, `:>:`, `:<=:`, `:>=:`).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SystemLiteral {
    pub elements: Vec<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(SystemLiteral);

/// A square-bracket container whose rows are separated by a single `;`
/// level. Rows may be empty (e.g. a leading or trailing `;`) and need not
/// share a common length — the parser preserves whatever was written.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Matrix {
    pub rows: Vec<Vec<crate::Node>>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Matrix);

/// One row of a [`Tensor`], tagged with the semicolon run length that
/// follows it (0 for the last row).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TensorEntry {
    pub row: Vec<crate::Node>,
    pub separator_level: u32,
}

/// A square-bracket container whose rows are separated by a semicolon run
/// of level two or higher (`;;` = plane, `;;;` = volume, ...).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Tensor {
    pub structure: Vec<TensorEntry>,
    pub max_dimension: u32,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Tensor);

/// An array (or, per the source's own quirk, an otherwise-empty array) with
/// `key := value` metadata attached alongside it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WithMetadata {
    pub primary: Box<crate::Node>,
    pub metadata: IndexMap<String, crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(WithMetadata);

/// A `{{ ... }}` block of semicolon-separated statements.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CodeBlock {
    pub statements: Vec<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(CodeBlock);
