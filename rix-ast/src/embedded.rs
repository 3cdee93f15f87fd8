use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

/// A backtick-delimited foreign-language fragment, carried verbatim.
/// `language` defaults to `"RiX-String"` when the header carries no
/// explicit language (see `rix_parser::embedded`).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EmbeddedLanguage {
    pub language: String,
    pub context: Option<String>,
    pub body: String,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(EmbeddedLanguage);
