use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

/// Which of the pipe-family operators (precedence level 20) produced this
/// node. `Pipe` (`|>`), `Explicit` (`||>`), `Map` (`|>>`), `Filter` (`|>?`),
/// and `Reduce` (`|>:`) are the five named forms the syntax tree
/// distinguishes; the remaining pipe-family symbols (`|+ |* |: |; |^ |?`)
/// are carried as `Other` with their literal surface text, since they name
/// no dedicated node shape of their own.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum PipeKind {
    Pipe,
    Explicit,
    Map,
    Filter,
    Reduce,
    Other(String),
}

impl PipeKind {
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "|>" => PipeKind::Pipe,
            "||>" => PipeKind::Explicit,
            "|>>" => PipeKind::Map,
            "|>?" => PipeKind::Filter,
            "|>:" => PipeKind::Reduce,
            other => PipeKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Pipe {
    pub kind: PipeKind,
    pub left: Box<crate::Node>,
    pub right: Box<crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Pipe);
