//! The syntax tree produced by `rix-parser`.
//!
//! Every node is built once during parsing and never mutated afterward; the
//! tree is a strict tree with no shared subtrees and no cycles. [`Node`] is
//! the tagged union of every node kind the grammar produces; [`Spanned`]
//! (in [`node`]) is the `span()`/`original()` behavior every variant's
//! inner struct implements.

pub mod calculus;
pub mod calls;
pub mod collections;
pub mod embedded;
pub mod functions;
pub mod grouping;
pub mod identifier;
pub mod literal;
pub mod node;
pub mod operators;
pub mod params;
pub mod pipe;
pub mod statement;

pub use calculus::{Derivative, Integral};
pub use calls::{FunctionCall, PropertyAccess};
pub use collections::{Array, CodeBlock, Matrix, MapLiteral, SetLiteral, SystemLiteral, Tensor, TensorEntry, WithMetadata};
pub use embedded::EmbeddedLanguage;
pub use functions::{FunctionDefinition, FunctionLambda, Pattern, PatternMatchingFunction};
pub use grouping::{Grouping, Tuple};
pub use identifier::{Associativity, Fixity, OperatorDescriptor, SystemIdentifier, SystemInfo, SystemSymbolKind, UserIdentifier};
pub use literal::{NullLiteral, NumberLiteral, PlaceHolder, StringKind, StringLiteral};
pub use node::Spanned;
pub use operators::{BinaryOperation, UnaryOperation};
pub use params::{Arguments, Parameter, ParameterListNode, Parameters};
pub use pipe::{Pipe, PipeKind};
pub use statement::{Comment, Statement};

use rix_span::Span;

/// The tagged union of every syntax-tree node kind. A full program is
/// `Vec<Node>` (see [`Program`]): zero or more top-level statements,
/// comments, and bare expressions.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Node {
    Number(NumberLiteral),
    String(StringLiteral),
    UserIdentifier(UserIdentifier),
    SystemIdentifier(SystemIdentifier),
    PlaceHolder(PlaceHolder),
    Null(NullLiteral),
    UnaryOperation(UnaryOperation),
    BinaryOperation(BinaryOperation),
    Grouping(Grouping),
    Tuple(Tuple),
    Array(Array),
    Set(SetLiteral),
    Map(MapLiteral),
    System(SystemLiteral),
    Matrix(Matrix),
    Tensor(Tensor),
    WithMetadata(WithMetadata),
    CodeBlock(CodeBlock),
    FunctionCall(FunctionCall),
    FunctionDefinition(FunctionDefinition),
    FunctionLambda(FunctionLambda),
    PatternMatchingFunction(PatternMatchingFunction),
    ParameterList(ParameterListNode),
    Pipe(Pipe),
    PropertyAccess(PropertyAccess),
    Derivative(Derivative),
    Integral(Integral),
    EmbeddedLanguage(EmbeddedLanguage),
    Statement(Statement),
    Comment(Comment),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Number(n) => n.span,
            Node::String(n) => n.span,
            Node::UserIdentifier(n) => n.span,
            Node::SystemIdentifier(n) => n.span,
            Node::PlaceHolder(n) => n.span,
            Node::Null(n) => n.span,
            Node::UnaryOperation(n) => n.span,
            Node::BinaryOperation(n) => n.span,
            Node::Grouping(n) => n.span,
            Node::Tuple(n) => n.span,
            Node::Array(n) => n.span,
            Node::Set(n) => n.span,
            Node::Map(n) => n.span,
            Node::System(n) => n.span,
            Node::Matrix(n) => n.span,
            Node::Tensor(n) => n.span,
            Node::WithMetadata(n) => n.span,
            Node::CodeBlock(n) => n.span,
            Node::FunctionCall(n) => n.span,
            Node::FunctionDefinition(n) => n.span,
            Node::FunctionLambda(n) => n.span,
            Node::PatternMatchingFunction(n) => n.span,
            Node::ParameterList(n) => n.span,
            Node::Pipe(n) => n.span,
            Node::PropertyAccess(n) => n.span,
            Node::Derivative(n) => n.span,
            Node::Integral(n) => n.span,
            Node::EmbeddedLanguage(n) => n.span,
            Node::Statement(n) => n.span,
            Node::Comment(n) => n.span,
        }
    }

    pub fn original(&self) -> &str {
        match self {
            Node::Number(n) => &n.original,
            Node::String(n) => &n.original,
            Node::UserIdentifier(n) => &n.original,
            Node::SystemIdentifier(n) => &n.original,
            Node::PlaceHolder(n) => &n.original,
            Node::Null(n) => &n.original,
            Node::UnaryOperation(n) => &n.original,
            Node::BinaryOperation(n) => &n.original,
            Node::Grouping(n) => &n.original,
            Node::Tuple(n) => &n.original,
            Node::Array(n) => &n.original,
            Node::Set(n) => &n.original,
            Node::Map(n) => &n.original,
            Node::System(n) => &n.original,
            Node::Matrix(n) => &n.original,
            Node::Tensor(n) => &n.original,
            Node::WithMetadata(n) => &n.original,
            Node::CodeBlock(n) => &n.original,
            Node::FunctionCall(n) => &n.original,
            Node::FunctionDefinition(n) => &n.original,
            Node::FunctionLambda(n) => &n.original,
            Node::PatternMatchingFunction(n) => &n.original,
            Node::ParameterList(n) => &n.original,
            Node::Pipe(n) => &n.original,
            Node::PropertyAccess(n) => &n.original,
            Node::Derivative(n) => &n.original,
            Node::Integral(n) => &n.original,
            Node::EmbeddedLanguage(n) => &n.original,
            Node::Statement(n) => &n.original,
            Node::Comment(n) => &n.original,
        }
    }

    /// Whether this node's type can itself carry a calculus operation —
    /// used by the calculus parser to classify a parenthesized argument
    /// list as `evaluations` vs `operations` (§4.6: "recursively detected
    /// by node type or by a prime in an identifier name").
    pub fn is_calculus_bearing(&self) -> bool {
        match self {
            Node::Derivative(_) | Node::Integral(_) => true,
            Node::UserIdentifier(id) => id.name.contains('\''),
            Node::SystemIdentifier(id) => id.name.contains('\''),
            Node::FunctionCall(call) => call.function.is_calculus_bearing(),
            Node::PropertyAccess(access) => access.object.is_calculus_bearing(),
            Node::Grouping(g) => g.expression.is_calculus_bearing(),
            Node::UnaryOperation(u) => u.operand.is_calculus_bearing(),
            Node::BinaryOperation(b) => b.left.is_calculus_bearing() || b.right.is_calculus_bearing(),
            _ => false,
        }
    }
}

/// A full parsed program: an ordered sequence of statement, comment, and
/// bare-expression nodes.
pub type Program = Vec<Node>;

#[cfg(test)]
mod tests {
    use super::*;
    use rix_span::Span;

    #[test]
    fn node_span_delegates_to_variant() {
        let n = Node::Number(NumberLiteral { value: "5".into(), span: Span::new(0, 1, 1), original: "5".into() });
        assert_eq!(n.span(), Span::new(0, 1, 1));
        assert_eq!(n.original(), "5");
    }

    #[test]
    fn calculus_bearing_detects_prime_in_identifier_name() {
        let n = Node::UserIdentifier(UserIdentifier { name: "f'".into(), span: Span::default(), original: "f'".into() });
        assert!(n.is_calculus_bearing());
        let m = Node::UserIdentifier(UserIdentifier { name: "x".into(), span: Span::default(), original: "x".into() });
        assert!(!m.is_calculus_bearing());
    }
}
