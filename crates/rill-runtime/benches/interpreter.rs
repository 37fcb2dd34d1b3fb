//! Interpreter benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rill_runtime::Rill;

fn bench_arithmetic(c: &mut Criterion) {
    c.bench_function("arithmetic", |b| {
        let runtime = Rill::new();
        b.iter(|| {
            let result = runtime.eval(black_box("1 + 2 * 3 - 4 / 2 + (5 * 6)"));
            black_box(result).unwrap()
        })
    });
}

fn bench_closure_calls(c: &mut Criterion) {
    c.bench_function("closure_calls", |b| {
        let runtime = Rill::new();
        runtime
            .eval("let makeAdder = fn(x) { fn(y) { x + y } }; let addFive = makeAdder(5);")
            .unwrap();
        b.iter(|| {
            let result = runtime.eval(black_box("addFive(37)"));
            black_box(result).unwrap()
        })
    });
}

fn bench_recursive_fibonacci(c: &mut Criterion) {
    c.bench_function("fib_15", |b| {
        let runtime = Rill::new();
        runtime
            .eval("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };")
            .unwrap();
        b.iter(|| {
            let result = runtime.eval(black_box("fib(15)"));
            black_box(result).unwrap()
        })
    });
}

fn bench_array_builtins(c: &mut Criterion) {
    c.bench_function("array_builtins", |b| {
        let runtime = Rill::new();
        runtime
            .eval("let sum = fn(arr) { if (len(arr) == 0) { 0 } else { head(arr) + sum(tail(arr)) } };")
            .unwrap();
        b.iter(|| {
            let result = runtime.eval(black_box("sum([1, 2, 3, 4, 5, 6, 7, 8, 9, 10])"));
            black_box(result).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_arithmetic,
    bench_closure_calls,
    bench_recursive_fibonacci,
    bench_array_builtins
);
criterion_main!(benches);
