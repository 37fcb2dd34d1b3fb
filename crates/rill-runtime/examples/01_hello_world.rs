//! Minimal embedding example
//!
//! Demonstrates the simplest possible use of the Rill runtime.
//!
//! Run with: cargo run --example 01_hello_world -p rill-runtime

use rill_runtime::Rill;

fn main() {
    let runtime = Rill::new();

    // Evaluate a simple expression
    let result = runtime.eval("1 + 2").expect("Failed to evaluate");

    println!("Result: {}", result.inspect());
    // Output: Result: 3

    // Evaluate a string expression
    let result = runtime
        .eval(r#""Hello, " + "World!""#)
        .expect("Failed to evaluate");

    println!("Result: {}", result.inspect());
    // Output: Result: "Hello, World!"

    // Define and call a function
    runtime
        .eval(r#"let greet = fn(name) { "Hello, " + name + "!" };"#)
        .expect("Failed to define function");

    let result = runtime
        .eval(r#"greet("Rill")"#)
        .expect("Failed to call function");

    println!("Result: {}", result.inspect());
    // Output: Result: "Hello, Rill!"
}
