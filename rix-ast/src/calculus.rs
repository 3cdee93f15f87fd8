use crate::node::{simple_node_impl, Spanned};
use indexmap::IndexMap;
use rix_span::Span;
use smallvec::SmallVec;

/// A bracketed `[v1, v2, ...]` variable list. Almost always 1-2 entries, so
/// this stays inline rather than heap-allocating like a general `Vec`.
pub type VariableList = SmallVec<[crate::Node; 2]>;

/// `f'[x,y](1,2)` — a postfix derivative. `order` is the run length of
/// primes. `variables` is the bracketed variable list, if present.
/// `evaluation`/`operations` are mutually exclusive classifications of a
/// trailing parenthesized argument list (see `rix_parser::calculus`).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Derivative {
    pub function: Box<crate::Node>,
    pub order: u32,
    pub variables: Option<VariableList>,
    pub evaluation: Option<Vec<crate::Node>>,
    pub operations: Option<Vec<crate::Node>>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Derivative);

/// `'f[x](0,1)` — a prefix integral, symmetric to [`Derivative`]. Carries a
/// default `metadata` of `{integrationConstant: "c", defaultValue: 0}`
/// unless overridden.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Integral {
    pub function: Box<crate::Node>,
    pub order: u32,
    pub variables: Option<VariableList>,
    pub evaluation: Option<Vec<crate::Node>>,
    pub operations: Option<Vec<crate::Node>>,
    pub metadata: IndexMap<String, crate::Node>,
    pub span: Span,
    pub original: String,
}
simple_node_impl!(Integral);

pub fn default_integral_metadata() -> IndexMap<String, crate::Node> {
    use crate::literal::NumberLiteral;
    use rix_span::Span as S;
    let mut metadata = IndexMap::new();
    metadata.insert(
        "integrationConstant".to_string(),
        crate::Node::String(crate::literal::StringLiteral {
            value: "c".to_string(),
            kind: crate::literal::StringKind::Quote,
            span: S::default(),
            original: String::new(),
        }),
    );
    metadata.insert(
        "defaultValue".to_string(),
        crate::Node::Number(NumberLiteral { value: "0".to_string(), span: S::default(), original: String::new() }),
    );
    metadata
}
