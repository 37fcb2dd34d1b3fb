//! Shared test utilities
//!
//! Common helpers to reduce boilerplate across integration tests.

#![allow(dead_code)]

use rill_runtime::{Rill, Value};

// Re-export testing utilities
pub use pretty_assertions::assert_eq;

/// Assert that source code evaluates to an integer
pub fn assert_eval_integer(source: &str, expected: i64) {
    let runtime = Rill::new();
    match runtime.eval(source) {
        Ok(Value::Integer(n)) => assert_eq!(n, expected, "for source: {}", source),
        other => panic!("Expected Integer({}) for {:?}, got {:?}", expected, source, other),
    }
}

/// Assert that source code evaluates to a boolean
pub fn assert_eval_bool(source: &str, expected: bool) {
    let runtime = Rill::new();
    match runtime.eval(source) {
        Ok(Value::Bool(b)) => assert_eq!(b, expected, "for source: {}", source),
        other => panic!("Expected Bool({}) for {:?}, got {:?}", expected, source, other),
    }
}

/// Assert that source code evaluates to a string
pub fn assert_eval_string(source: &str, expected: &str) {
    let runtime = Rill::new();
    match runtime.eval(source) {
        Ok(Value::String(s)) => assert_eq!(s.as_ref(), expected, "for source: {}", source),
        other => panic!("Expected String({:?}) for {:?}, got {:?}", expected, source, other),
    }
}

/// Assert that source code evaluates to null
pub fn assert_eval_null(source: &str) {
    let runtime = Rill::new();
    match runtime.eval(source) {
        Ok(Value::Null) => {}
        other => panic!("Expected Null for {:?}, got {:?}", source, other),
    }
}

/// Assert that source code fails with the exact runtime error message
pub fn assert_error_message(source: &str, expected: &str) {
    let runtime = Rill::new();
    match runtime.eval(source) {
        Err(diags) => {
            assert!(!diags.is_empty(), "Expected error for {:?}", source);
            assert_eq!(diags[0].message, expected, "for source: {}", source);
        }
        Ok(val) => panic!(
            "Expected error {:?} for {:?}, got success: {:?}",
            expected, source, val
        ),
    }
}

/// Assert that source code produces at least one diagnostic
pub fn assert_has_error(source: &str) {
    let runtime = Rill::new();
    match runtime.eval(source) {
        Err(diags) => assert!(!diags.is_empty(), "Expected error for {:?}", source),
        Ok(val) => panic!("Expected error for {:?}, got success: {:?}", source, val),
    }
}

/// Evaluate source, panicking on any diagnostics
pub fn eval_ok(source: &str) -> Value {
    let runtime = Rill::new();
    match runtime.eval(source) {
        Ok(value) => value,
        Err(diags) => panic!("Evaluation of {:?} failed: {:?}", source, diags),
    }
}
