use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use netspan::graph::{adjacency_from_edges, kruskal, prim, Edge};

/// Ring plus random chords: connected by construction, dense enough to give
/// both engines real work.
fn random_connected_graph(num_vertices: usize, extra_edges: usize) -> Vec<Edge<f64>> {
    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity(num_vertices + extra_edges);
    for v in 0..num_vertices {
        edges.push(Edge::new(
            v,
            (v + 1) % num_vertices,
            rng.gen_range(1.0..100.0),
        ));
    }
    while edges.len() < num_vertices + extra_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        if u != v {
            edges.push(Edge::new(u, v, rng.gen_range(1.0..100.0)));
        }
    }
    edges
}

fn bench_mst(c: &mut Criterion) {
    let num_vertices = 1_000;
    let edges = random_connected_graph(num_vertices, 4_000);
    let adjacency = adjacency_from_edges(num_vertices, &edges).unwrap();

    c.bench_function("kruskal_1000v_5000e", |b| {
        b.iter(|| kruskal::minimum_spanning_tree(black_box(num_vertices), black_box(&edges)))
    });
    c.bench_function("prim_1000v_5000e", |b| {
        b.iter(|| prim::minimum_spanning_tree(black_box(&adjacency), black_box(0)))
    });
}

criterion_group!(benches, bench_mst);
criterion_main!(benches);
