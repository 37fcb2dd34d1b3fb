//! Interpreter integration tests
//!
//! End-to-end evaluation through the embedding API: literals, operators,
//! conditionals, early returns, the error taxonomy, arrays, and hashes.

mod common;

use common::*;
use common::assert_eq;
use rill_runtime::{Rill, Value};
use rstest::rstest;

#[rstest]
#[case("5", 5)]
#[case("10", 10)]
#[case("-5", -5)]
#[case("-10", -10)]
#[case("5 + 5 + 5 + 5 - 10", 10)]
#[case("2 * 2 * 2 * 2 * 2", 32)]
#[case("-50 + 100 + -50", 0)]
#[case("5 * 2 + 10", 20)]
#[case("5 + 2 * 10", 25)]
#[case("20 + 2 * -10", 0)]
#[case("50 / 2 * 2 + 10", 60)]
#[case("2 * (5 + 10)", 30)]
#[case("3 * 3 * 3 + 10", 37)]
#[case("3 * (3 * 3) + 10", 37)]
#[case("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)]
fn test_integer_expressions(#[case] source: &str, #[case] expected: i64) {
    assert_eval_integer(source, expected);
}

#[rstest]
#[case("true", true)]
#[case("false", false)]
#[case("1 < 2", true)]
#[case("1 > 2", false)]
#[case("1 == 1", true)]
#[case("1 != 1", false)]
#[case("1 == 2", false)]
#[case("1 != 2", true)]
#[case("true == true", true)]
#[case("false == false", true)]
#[case("true == false", false)]
#[case("true != false", true)]
#[case("(1 < 2) == true", true)]
#[case("(1 > 2) == true", false)]
#[case("!true", false)]
#[case("!false", true)]
#[case("!5", false)]
#[case("!!true", true)]
#[case("!!5", true)]
fn test_boolean_expressions(#[case] source: &str, #[case] expected: bool) {
    assert_eval_bool(source, expected);
}

#[test]
fn test_let_and_identifier() {
    assert_eval_integer("let x = 5; x;", 5);
    assert_eval_integer("let a = 5; let b = a; b;", 5);
    assert_eval_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
}

#[rstest]
#[case("if (true) { 10 }", Some(10))]
#[case("if (false) { 10 }", None)]
#[case("if (1) { 10 }", Some(10))]
#[case("if (1 < 2) { 10 }", Some(10))]
#[case("if (1 > 2) { 10 }", None)]
#[case("if (1 > 2) { 10 } else { 20 }", Some(20))]
#[case("if (1 < 2) { 10 } else { 20 }", Some(10))]
// Zero and null are on opposite sides of the truthiness line
#[case("if (0) { 10 } else { 20 }", Some(10))]
fn test_if_else_truthiness(#[case] source: &str, #[case] expected: Option<i64>) {
    match expected {
        Some(n) => assert_eval_integer(source, n),
        None => assert_eval_null(source),
    }
}

#[rstest]
#[case("return 10;", 10)]
#[case("return 10; 9;", 10)]
#[case("return 2 * 5; 9;", 10)]
#[case("9; return 2 * 5; 9;", 10)]
fn test_return_statements(#[case] source: &str, #[case] expected: i64) {
    assert_eval_integer(source, expected);
}

#[test]
fn test_nested_return_bubbles_through_blocks() {
    let source = "if (10 > 1) { if (10 > 1) { return 9; } return 10; }";
    assert_eval_integer(source, 9);
}

#[rstest]
#[case("5 + true;", "type mismatch: INTEGER + BOOLEAN")]
#[case("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN")]
#[case("-true", "unknown operator: -BOOLEAN")]
#[case("true + false;", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN")]
#[case(
    "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
    "unknown operator: BOOLEAN + BOOLEAN"
)]
#[case("foobar", "identifier not found: foobar")]
#[case(r#""foo" - "bar""#, "unknown operator: STRING - STRING")]
#[case("5(1)", "not a function: INTEGER")]
#[case("1 / 0", "division by zero")]
fn test_error_taxonomy(#[case] source: &str, #[case] expected: &str) {
    assert_error_message(source, expected);
}

#[test]
fn test_error_short_circuits_let_binding() {
    // The failing sub-expression surfaces, not a follow-on error
    assert_error_message(
        "let x = 5 + true; x;",
        "type mismatch: INTEGER + BOOLEAN",
    );
}

#[test]
fn test_string_concatenation() {
    assert_eval_string(r#""foo" + "bar""#, "foobar");
    assert_eval_string(r#""foo" + "bar" + "baz""#, "foobarbaz");
    assert_eval_string(r#""hello" + " " + "world""#, "hello world");
}

#[test]
fn test_array_literal_evaluation() {
    let value = eval_ok("[1, 2 * 2, 3 + 3]");
    match value {
        Value::Array(elements) => {
            assert_eq!(elements.len(), 3);
            assert_eq!(elements[0], Value::Integer(1));
            assert_eq!(elements[1], Value::Integer(4));
            assert_eq!(elements[2], Value::Integer(6));
        }
        other => panic!("Expected array, got {:?}", other),
    }
}

#[rstest]
#[case("[1, 2, 3][0]", Some(1))]
#[case("[1, 2, 3][1]", Some(2))]
#[case("[1, 2, 3][2]", Some(3))]
#[case("let i = 0; [1][i];", Some(1))]
#[case("[1, 2, 3][1 + 1];", Some(3))]
#[case("let myArray = [1, 2, 3]; myArray[2];", Some(3))]
#[case(
    "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
    Some(6)
)]
#[case("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", Some(2))]
// Out-of-range and negative indices yield null, no wrap-around
#[case("[1, 2, 3][3]", None)]
#[case("[1, 2, 3][-1]", None)]
fn test_array_index(#[case] source: &str, #[case] expected: Option<i64>) {
    match expected {
        Some(n) => assert_eval_integer(source, n),
        None => assert_eval_null(source),
    }
}

#[test]
fn test_hash_literal_round_trip() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;

    let value = eval_ok(source);
    let hash = match value {
        Value::Hash(h) => h,
        other => panic!("Expected hash, got {:?}", other),
    };

    let expected = [
        (Value::string("one"), 1),
        (Value::string("two"), 2),
        (Value::string("three"), 3),
        (Value::Integer(4), 4),
        (Value::Bool(true), 5),
        (Value::Bool(false), 6),
    ];

    assert_eq!(hash.pairs.len(), expected.len());
    for (key, expected_value) in expected {
        let hash_key = key.hash_key().expect("key should be hashable");
        let (_, value) = hash
            .pairs
            .get(&hash_key)
            .unwrap_or_else(|| panic!("missing entry for {:?}", key));
        assert_eq!(*value, Value::Integer(expected_value));
    }
}

#[rstest]
#[case(r#"{"foo": 5}["foo"]"#, Some(5))]
#[case(r#"{"foo": 5}["bar"]"#, None)]
#[case(r#"let key = "foo"; {"foo": 5}[key]"#, Some(5))]
#[case(r#"{}["foo"]"#, None)]
#[case("{5: 5}[5]", Some(5))]
#[case("{true: 5}[true]", Some(5))]
#[case("{false: 5}[false]", Some(5))]
fn test_hash_index(#[case] source: &str, #[case] expected: Option<i64>) {
    match expected {
        Some(n) => assert_eval_integer(source, n),
        None => assert_eval_null(source),
    }
}

#[test]
fn test_hash_duplicate_keys_overwrite() {
    assert_eval_integer(r#"{"a": 1, "a": 2}["a"]"#, 2);
}

#[test]
fn test_hash_key_equivalence_across_expressions() {
    // Equal keys by surface ==  hash to the same slot
    assert_eval_integer(r#"{"one": 1}["on" + "e"]"#, 1);
    assert_eval_integer("{4: 4}[2 + 2]", 4);
}

#[test]
fn test_deterministic_evaluation() {
    let source = "let f = fn(x) { x * 2 }; [f(1), f(2), f(3)]";
    let first = eval_ok(source);
    let second = eval_ok(source);
    assert_eq!(first, second);
}

#[test]
fn test_function_value_inspect() {
    let runtime = Rill::new();
    let value = runtime.eval("fn(x) { x + 2 }").unwrap();
    assert_eq!(value.inspect(), "fn(x){\n(x + 2)\n}");
}
