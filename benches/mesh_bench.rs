//! Benchmarks for grillage mesh generation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grillage_mesh::prelude::*;

fn deck(skew: f64, girders: usize, grid: usize, strategy: MeshStrategy) -> MeshConfig {
    MeshConfig::new(40.0, 15.0, skew, girders, grid, 1.5).with_strategy(strategy)
}

fn benchmark_skew_mesh(c: &mut Criterion) {
    let config = deck(20.0, 9, 21, MeshStrategy::Skew);
    c.bench_function("skew_mesh_9girder_21grid", |b| {
        b.iter(|| {
            let mesh = GrillageMesh::generate(black_box(&config)).unwrap();
            black_box(&mesh);
        })
    });
}

fn benchmark_orthogonal_mesh(c: &mut Criterion) {
    let config = deck(35.0, 9, 21, MeshStrategy::Orthogonal);
    c.bench_function("orthogonal_mesh_9girder_21grid", |b| {
        b.iter(|| {
            let mesh = GrillageMesh::generate(black_box(&config)).unwrap();
            black_box(&mesh);
        })
    });
}

fn benchmark_dense_orthogonal_mesh(c: &mut Criterion) {
    let config = deck(40.0, 40, 101, MeshStrategy::Orthogonal);
    c.bench_function("orthogonal_mesh_40girder_101grid", |b| {
        b.iter(|| {
            let mesh = GrillageMesh::generate(black_box(&config)).unwrap();
            black_box(&mesh);
        })
    });
}

fn benchmark_script(c: &mut Criterion) {
    let mesh = GrillageMesh::generate(&deck(35.0, 9, 21, MeshStrategy::Orthogonal)).unwrap();
    let mut assignments = SectionAssignments::new();
    for group in SectionGroup::ALL {
        assignments.assign(
            group,
            MemberProperties::new(MemberSection::rectangular(1.0, 0.2), Material::concrete(40e6)),
        );
    }
    c.bench_function("script_orthogonal_9girder_21grid", |b| {
        b.iter(|| {
            let script = OpenSeesScript::new(&mesh, &assignments).render().unwrap();
            black_box(script);
        })
    });
}

criterion_group!(
    benches,
    benchmark_skew_mesh,
    benchmark_orthogonal_mesh,
    benchmark_dense_orthogonal_mesh,
    benchmark_script,
);

criterion_main!(benches);
