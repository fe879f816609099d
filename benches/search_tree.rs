use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::VecDeque;

use sapwood::{traversal::Order, SearchTree};

/// Values `0..num_nodes` in an order which produces a perfectly balanced tree when inserted.
fn balanced_order(num_nodes: i32) -> Vec<i32> {
    let mut order = Vec::with_capacity(num_nodes as usize);
    let mut ranges = VecDeque::new();
    ranges.push_back((0, num_nodes));
    while let Some((start, end)) = ranges.pop_front() {
        if start >= end {
            continue;
        }
        let middle = start + (end - start) / 2;
        order.push(middle);
        ranges.push_back((start, middle));
        ranges.push_back((middle + 1, end));
    }
    order
}

/// Helper to bench a function on a search tree.
/// It creates a group for the given name and closure and runs it on balanced trees of various
/// heights, always with the largest value in the tree as the argument.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut SearchTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15].iter() {
        let num_nodes = 2_i32.pow(*num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;
        let tree: SearchTree<i32> = balanced_order(num_nodes).into_iter().collect();

        let id = BenchmarkId::new("sparse_vec", largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    time += instant.elapsed();
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _value = black_box(tree.get(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_helper(c, "remove-root", |tree, _| {
        let root = tree.root().map(|x| *x.value());
        if let Some(root) = root {
            tree.remove(&root);
        }
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "search-miss", |tree, i| {
        let _value = black_box(tree.get(&(i + 1)));
    });
    bench_helper(c, "in-order", |tree, _| {
        black_box(tree.values(Order::InOrder).count());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
