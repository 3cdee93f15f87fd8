//! Mirrors the teacher's `ast/tests/serialization/json.rs`: a tree built by
//! hand is serialized to JSON and checked against the shape the tagged
//! `Node` enum is expected to produce, rather than against a hand-authored
//! `Program` golden file (this crate is parser-agnostic — it has no
//! `Grammar::load_file`-equivalent of its own to build one from).

use rix_ast::{BinaryOperation, Node, NumberLiteral, UserIdentifier};
use rix_span::Span;

fn sample_tree() -> Node {
    let x = Node::UserIdentifier(UserIdentifier { name: "x".into(), span: Span::new(0, 1, 1), original: "x".into() });
    let one = Node::Number(NumberLiteral { value: "1".into(), span: Span::new(4, 5, 1), original: "1".into() });
    Node::BinaryOperation(BinaryOperation {
        operator: "+".into(),
        left: Box::new(x),
        right: Box::new(one),
        span: Span::new(0, 5, 1),
        original: "x + 1".into(),
    })
}

#[test]
fn serializes_binary_operation_with_tagged_variant() {
    let value = serde_json::to_value(sample_tree()).unwrap();
    let obj = value.as_object().expect("Node serializes as a JSON object");
    assert!(obj.contains_key("BinaryOperation"), "expected a BinaryOperation tag, got {value}");

    let bin = &obj["BinaryOperation"];
    assert_eq!(bin["operator"], "+");
    assert_eq!(bin["original"], "x + 1");
    assert!(bin["left"].get("UserIdentifier").is_some());
    assert!(bin["right"].get("Number").is_some());
}

#[test]
fn span_fields_survive_serialization() {
    let value = serde_json::to_value(sample_tree()).unwrap();
    let span = &value["BinaryOperation"]["span"];
    assert_eq!(span["start"], 0);
    assert_eq!(span["end"], 5);
    assert_eq!(span["line"], 1);
}
