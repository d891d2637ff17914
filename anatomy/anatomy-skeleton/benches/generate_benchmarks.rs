//! Benchmarks for skeleton generation and registry construction.
//!
//! Run with: cargo bench -p anatomy-skeleton

#![allow(missing_docs, clippy::wildcard_imports)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use anatomy_skeleton::{GeneratorConfig, JointRegistry, SkeletonGenerator, generate, validate};
use anatomy_types::{GeneticParameters, SegmentId};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(SegmentId::COUNT as u64));

    // Warm the shared registry so the first sample doesn't pay for it.
    let _ = JointRegistry::global();

    group.bench_function("average_adult", |b| {
        let params = GeneticParameters::average_adult();
        b.iter(|| generate(black_box(&params)));
    });

    for build in [0.7, 1.0, 1.3] {
        let params = GeneticParameters::average_adult().with_build(build);
        group.bench_with_input(BenchmarkId::new("build", build), &params, |b, params| {
            b.iter(|| generate(black_box(params)));
        });
    }

    group.bench_function("strict", |b| {
        let params = GeneticParameters::average_adult();
        let generator = SkeletonGenerator::new().with_config(GeneratorConfig::strict());
        b.iter(|| generator.generate(black_box(&params)));
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("standard", |b| {
        b.iter(JointRegistry::standard);
    });

    let registry = JointRegistry::standard();
    group.bench_function("validate", |b| {
        b.iter(|| validate(black_box(&registry)));
    });

    group.finish();
}

fn bench_world_positions(c: &mut Criterion) {
    let skeleton = generate(&GeneticParameters::average_adult());
    let registry = JointRegistry::global();

    c.bench_function("world_bind_positions", |b| {
        b.iter(|| skeleton.world_bind_positions(black_box(registry)));
    });
}

criterion_group!(benches, bench_generate, bench_registry, bench_world_positions);
criterion_main!(benches);
