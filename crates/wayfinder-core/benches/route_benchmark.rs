//! Benchmark suite for map replacement and shortest-route search.
//!
//! Run with: `cargo bench --bench route_benchmark`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wayfinder_core::{MapEdge, MapNode, MapStore};

/// Build an n×n grid: each cell links right and down with deterministic
/// pseudo-random weights so routes are not all equivalent.
fn grid(n: usize) -> Vec<MapNode> {
    let weight = |r: usize, c: usize| ((r * 7 + c * 13) % 9 + 1) as u64;
    let mut nodes = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let mut node = MapNode::new(&format!("{row}:{col}"));
            if col + 1 < n {
                node = node.with_edge(MapEdge::new(&format!("{row}:{}", col + 1), weight(row, col)));
            }
            if row + 1 < n {
                node = node.with_edge(MapEdge::new(&format!("{}:{col}", row + 1), weight(col, row)));
            }
            nodes.push(node);
        }
    }
    nodes
}

fn bench_shortest_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_route");
    for n in [8usize, 32, 64] {
        let store = MapStore::new();
        store.set_map(grid(n));
        let goal = format!("{}:{}", n - 1, n - 1);
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &n, |b, _| {
            b.iter(|| {
                store
                    .shortest_route(black_box("0:0"), black_box(&goal))
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_set_map(c: &mut Criterion) {
    let nodes = grid(32);
    let store = MapStore::new();
    c.bench_function("set_map_1024_nodes", |b| {
        b.iter(|| store.set_map(black_box(nodes.clone())));
    });
}

criterion_group!(benches, bench_shortest_route, bench_set_map);
criterion_main!(benches);
