use crate::node::{simple_node_impl, Spanned};
use rix_span::Span;

/// An identifier the oracle does not recognize as a system symbol.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UserIdentifier {
    pub name: String,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(UserIdentifier);

/// An identifier the oracle recognizes, carrying whatever descriptor the
/// oracle returned for it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SystemIdentifier {
    pub name: String,
    pub system_info: SystemInfo,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(SystemIdentifier);

/// The category the oracle assigned to a system symbol. Only `Operator`
/// carries enough information to plug into the Pratt engine; the rest are
/// informational and passed through untouched.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum SystemSymbolKind {
    Function,
    Constant,
    Operator,
    Identifier,
}

/// Left-binds tighter on ties (default) or right-binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Associativity {
    Left,
    Right,
}

impl Default for Associativity {
    fn default() -> Self {
        Associativity::Left
    }
}

/// Where the operator attaches relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

impl Default for Fixity {
    fn default() -> Self {
        Fixity::Infix
    }
}

/// The operator metadata an oracle attaches to a `type: "operator"` symbol.
/// A missing `precedence` defaults to the multiplication level (90) when the
/// Pratt engine consumes it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OperatorDescriptor {
    pub precedence: Option<u16>,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// The full descriptor an oracle lookup returns for a name, attached
/// verbatim to the resulting [`SystemIdentifier`] node.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SystemInfo {
    pub kind: SystemSymbolKind,
    pub operator: Option<OperatorDescriptor>,
}

impl SystemInfo {
    /// The total lookup result for a name the oracle has never heard of.
    pub fn unknown_identifier() -> Self {
        SystemInfo { kind: SystemSymbolKind::Identifier, operator: None }
    }
}
