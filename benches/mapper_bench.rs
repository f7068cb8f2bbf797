//! Benchmark for path resolution and specification mapping.
//!
//! Compares resolution cost across path depths and mapping cost across
//! specification sizes.

#![cfg(feature = "mapper")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dtomap::mapper::{MappingSpec, map_to_dto};
use dtomap::resolve::{Path, resolve};
use serde_json::{Value, json};

fn nested_source(depth: usize) -> Value {
    let mut value = json!({"leaf": 1});
    for level in (0..depth).rev() {
        let mut object = serde_json::Map::new();
        object.insert(format!("level{level}"), value);
        value = Value::Object(object);
    }
    value
}

fn deep_path(depth: usize) -> Path {
    let segments: Vec<String> = (0..depth)
        .map(|level| format!("level{level}"))
        .chain(std::iter::once("leaf".to_string()))
        .collect();
    Path::from_segments(segments)
}

// =============================================================================
// Path Resolution Benchmark
// =============================================================================

fn benchmark_resolution(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("resolve_depth");

    for depth in [2, 8, 32] {
        let source = nested_source(depth);
        let path = deep_path(depth);

        group.bench_with_input(
            BenchmarkId::new("resolve", depth),
            &(source, path),
            |bencher, (source, path)| {
                bencher.iter(|| black_box(resolve(black_box(source), black_box(path))));
            },
        );
    }

    group.finish();
}

fn benchmark_path_parsing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("path_parse");

    for (name, path) in [
        ("short", "user.name"),
        ("bracketed", "user.skills[0].name"),
        ("long", "a.b.c.d.e.f.g.h.i.j"),
    ] {
        group.bench_with_input(BenchmarkId::new("parse", name), path, |bencher, path| {
            bencher.iter(|| black_box(Path::parse(black_box(path))));
        });
    }

    group.finish();
}

// =============================================================================
// Mapping Benchmark
// =============================================================================

fn benchmark_mapping(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_to_dto");

    let source = json!({
        "user": {
            "name": "ayaan",
            "age": null,
            "skills": ["java", "node", "html"],
        },
        "meta": {"created": "12/12/2012"},
    });

    for width in [4, 16, 64] {
        let spec: MappingSpec = (0..width)
            .map(|index| (format!("field{index}"), "user.name"))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("flat", width),
            &spec,
            |bencher, spec| {
                bencher.iter(|| black_box(map_to_dto(black_box(&source), black_box(spec))));
            },
        );
    }

    for depth in [2, 8, 32] {
        let mut spec = MappingSpec::new().with_field("name", "user.name");
        for _ in 0..depth {
            spec = MappingSpec::new().with_field("inner", spec);
        }

        group.bench_with_input(
            BenchmarkId::new("nested", depth),
            &spec,
            |bencher, spec| {
                bencher.iter(|| black_box(map_to_dto(black_box(&source), black_box(spec))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_resolution,
    benchmark_path_parsing,
    benchmark_mapping,
);
criterion_main!(benches);
