use crate::node::{simple_node_impl, Spanned};
use crate::params::Parameters;
use indexmap::IndexMap;
use rix_span::Span;

/// `name(params...) :-> body`, a named function definition.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub parameters: Parameters,
    pub body: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(FunctionDefinition);

/// `(params...) -> body`, an anonymous lambda.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FunctionLambda {
    pub parameters: Parameters,
    pub body: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(FunctionLambda);

/// One arm of a [`PatternMatchingFunction`]: the arrow-lambda's own
/// parameter spec and body, shorn of the arrow itself.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Pattern {
    pub parameters: Parameters,
    pub body: Box<crate::Node>,
}

/// `name :=> [ (params) -> body, ... ]`, a pattern-matching function
/// definition. `parameters` is populated only when the head itself carried
/// an argument list (`name(params) :=> ...`, mirroring `:->`); a bare-name
/// head leaves it empty. `metadata` is lifted from a `WithMetadata`
/// wrapping the pattern array, if one was present.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PatternMatchingFunction {
    pub name: String,
    pub parameters: Parameters,
    pub patterns: Vec<Pattern>,
    pub metadata: IndexMap<String, crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(PatternMatchingFunction);
