//! Closures and first-class functions
//!
//! Shows function values capturing their defining scope, surviving across
//! eval calls on the same runtime.
//!
//! Run with: cargo run --example 02_closures -p rill-runtime

use rill_runtime::Rill;

fn main() {
    let runtime = Rill::new();

    runtime
        .eval("let newAdder = fn(x) { fn(y) { x + y } };")
        .expect("Failed to define newAdder");

    runtime
        .eval("let addTwo = newAdder(2);")
        .expect("Failed to build closure");

    let result = runtime.eval("addTwo(40)").expect("Failed to call closure");
    println!("addTwo(40) = {}", result.inspect());
    // Output: addTwo(40) = 42

    // Builtins compose with user functions
    runtime
        .eval(
            "let sum = fn(arr) { if (len(arr) == 0) { 0 } else { head(arr) + sum(tail(arr)) } };",
        )
        .expect("Failed to define sum");

    let result = runtime
        .eval("sum([1, 2, 3, 4, 5])")
        .expect("Failed to sum");
    println!("sum([1, 2, 3, 4, 5]) = {}", result.inspect());
    // Output: sum([1, 2, 3, 4, 5]) = 15
}
