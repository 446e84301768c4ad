//! Criterion benches for the three discovery phases.
//!
//! - edges: O(V^2) distance scan on the 120-cell (600 vertices).
//! - faces: cycle walk on the 24-cell and 600-cell.
//! - cells: parallel search on the 24-cell and 600-cell, single vs. all workers.
//!
//! Results live under `target/criterion`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polychora::{discover_cells, discover_edges, discover_faces, CellSearchCfg, Polychoron};

fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");
    for p in [Polychoron::Cell600, Polychoron::Cell120] {
        let params = p.params();
        group.bench_function(BenchmarkId::from_parameter(p.name()), |b| {
            b.iter(|| {
                black_box(discover_edges(
                    &params.vertices,
                    params.edge_length,
                    params.eps,
                ))
            })
        });
    }
    group.finish();
}

fn bench_faces(c: &mut Criterion) {
    let mut group = c.benchmark_group("faces");
    for p in [Polychoron::Cell24, Polychoron::Cell600] {
        let params = p.params();
        let edges = discover_edges(&params.vertices, params.edge_length, params.eps);
        group.bench_function(BenchmarkId::from_parameter(p.name()), |b| {
            b.iter(|| {
                black_box(discover_faces(
                    params.vertices.len(),
                    &edges,
                    params.edges_per_face,
                ))
            })
        });
    }
    group.finish();
}

fn bench_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("cells");
    group.sample_size(10);
    for p in [Polychoron::Cell24, Polychoron::Cell600] {
        let params = p.params();
        let edges = discover_edges(&params.vertices, params.edge_length, params.eps);
        let faces = discover_faces(params.vertices.len(), &edges, params.edges_per_face);
        for (label, cfg) in [
            ("1-worker", CellSearchCfg::default().with_workers(1)),
            ("auto", CellSearchCfg::default()),
        ] {
            group.bench_with_input(BenchmarkId::new(p.name(), label), &cfg, |b, &cfg| {
                b.iter(|| {
                    black_box(discover_cells(
                        &params.vertices,
                        &edges,
                        &faces,
                        params.faces_per_cell,
                        params.expected_cells,
                        cfg,
                    ))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_edges, bench_faces, bench_cells);
criterion_main!(benches);
