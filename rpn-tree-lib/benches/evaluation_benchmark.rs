use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rpn_tree::interpreter::evaluator::VariableMap;
use rpn_tree::interpreter::parser::{infix_to_postfix, new_tree_from_str};

const EXPRESSIONS: [&str; 5] = [
    "x ^ 2",
    "x ^ 3 + 2 * x ^ 2 - 4 * x + 3",
    "a + b * (c - d) / e",
    "(x ^ 2 + z) ^ (y * z) + (a + b + c ^ x) - (8 * x ^ 2)",
    "((a - b) - (c - d)) * ((e + x) / (y - z)) % 7",
];

fn variables() -> VariableMap {
    ["a", "b", "c", "d", "e", "x", "y", "z"]
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index as f64 + 1.5))
        .collect()
}

fn conversion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("infix_to_postfix");
    for expression in EXPRESSIONS {
        group.throughput(Throughput::Bytes(expression.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| infix_to_postfix(expression));
            },
        );
    }
}

fn evaluation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let variables = variables();
    for expression in EXPRESSIONS {
        let postfix = match infix_to_postfix(expression) {
            Ok(postfix) => postfix,
            Err(_) => continue,
        };
        // Modulo converts but has no tree node, so that expression is skipped here.
        let tree = match new_tree_from_str(&postfix) {
            Ok(tree) => tree,
            Err(_) => continue,
        };

        group.bench_with_input(
            BenchmarkId::new("build", expression),
            &postfix,
            |bencher, postfix| {
                bencher.iter(|| new_tree_from_str(postfix));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("evaluate", expression),
            &tree,
            |bencher, tree| {
                bencher.iter(|| tree.evaluate(&variables));
            },
        );
    }
}

criterion_group!(benches, conversion_benchmark, evaluation_benchmark);
criterion_main!(benches);
