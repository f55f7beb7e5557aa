use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dualpath::{build_unweighted_view, build_weighted_view, WeightedGraph};
use dualpath_algorithms::{bfs_tree, dual_metric_shortest_paths, reconstruct_path};

/// Square grid with right/down edges; every third edge has weight zero
fn grid(side: u64) -> WeightedGraph<u64, u64> {
    let mut graph = WeightedGraph::new();
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            graph.add_vertex(id);
            if c + 1 < side {
                graph.add_edge(id, id + 1, id % 3);
            }
            if r + 1 < side {
                graph.add_edge(id, id + side, (id + 1) % 3);
            }
        }
    }
    graph
}

/// Benchmark the dual-metric search, view reused across iterations
fn bench_dual_metric(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_metric_shortest_paths");

    for side in [10u64, 50, 100].iter() {
        let view = build_weighted_view(&grid(*side));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), side, |b, _| {
            b.iter(|| {
                let table = dual_metric_shortest_paths(&view, &0).unwrap();
                criterion::black_box(table.len());
            });
        });
    }
    group.finish();
}

/// Benchmark BFS tree construction plus one path reconstruction
fn bench_bfs_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs_tree");

    for side in [10u64, 50, 100].iter() {
        let view = build_unweighted_view(&grid(*side).to_unweighted());
        let corner = side * side - 1;
        group.bench_with_input(BenchmarkId::from_parameter(side * side), side, |b, _| {
            b.iter(|| {
                let parents = bfs_tree(&view, &0).unwrap();
                criterion::black_box(reconstruct_path(&parents, &corner).len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dual_metric, bench_bfs_tree);
criterion_main!(benches);
