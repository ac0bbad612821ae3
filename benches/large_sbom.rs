//! Performance benchmarks for large SBOM operations.
//!
//! Run with: cargo bench --bench large_sbom
//!
//! Covers the three stages of a run: loading a document, classifying every
//! component against the default policy, and diffing two snapshots.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sbom_guard::compliance::{ComplianceEvaluator, LicensePolicy};
use sbom_guard::diff::DiffEngine;
use sbom_guard::model::{Component, Sbom};
use sbom_guard::parsers::parse_sbom_str;
use std::hint::black_box;

const LICENSES: [&str; 6] = [
    "MIT",
    "Apache-2.0",
    "GNU General Public License v3 (GPLv3)",
    "LGPL",
    "Unknown",
    "Some Vendor License (proprietary)",
];

/// Generate a test SBOM with the specified number of components.
fn generate_sbom(prefix: &str, count: usize) -> Sbom {
    Sbom::from_components((0..count).map(|i| {
        Component::new(format!("{prefix}-component-{i}"))
            .with_version(format!("1.{}.{}", i % 10, i % 100))
            .with_license(LICENSES[i % LICENSES.len()])
    }))
}

/// Generate two related SBOMs with a share of components removed, added and
/// bumped.
fn generate_sbom_pair(size: usize, change_percent: usize) -> (Sbom, Sbom) {
    let old = generate_sbom("pkg", size);
    let changes = size * change_percent / 100;

    let mut new = Sbom::default();
    for (i, comp) in old.components.iter().enumerate() {
        if i < changes {
            // Dropped
            continue;
        }
        if i < changes * 2 {
            new.add_component(comp.clone().with_version("2.0.0"));
        } else {
            new.add_component(comp.clone());
        }
    }
    for i in 0..changes {
        new.add_component(Component::new(format!("added-component-{i}")).with_version("0.1.0"));
    }

    (old, new)
}

fn to_document(sbom: &Sbom) -> String {
    let components: Vec<serde_json::Value> = sbom
        .components
        .iter()
        .map(|c| {
            serde_json::json!({
                "type": "library",
                "name": c.name,
                "version": c.version,
                "licenses": [{"license": {"name": c.license}}]
            })
        })
        .collect();
    serde_json::json!({
        "bomFormat": "CycloneDX",
        "specVersion": "1.5",
        "components": components
    })
    .to_string()
}

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaling");

    for size in [100, 1_000, 10_000] {
        let document = to_document(&generate_sbom("pkg", size));
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, doc| {
            b.iter(|| black_box(parse_sbom_str(black_box(doc))));
        });
    }

    group.finish();
}

fn bench_evaluate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_scaling");
    let policy = LicensePolicy::default();
    let evaluator = ComplianceEvaluator::new(&policy);

    for size in [100, 1_000, 10_000] {
        let sbom = generate_sbom("pkg", size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sbom, |b, sbom| {
            b.iter(|| black_box(evaluator.evaluate(black_box(sbom))));
        });
    }

    group.finish();
}

fn bench_diff_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_scaling");
    let engine = DiffEngine::new();

    for size in [100, 1_000, 10_000] {
        let (old, new) = generate_sbom_pair(size, 10);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(engine.diff(black_box(&old), black_box(&new))));
        });
    }

    group.finish();
}

fn bench_diff_identical(c: &mut Criterion) {
    let sbom = generate_sbom("pkg", 5_000);
    let engine = DiffEngine::new();

    c.bench_function("diff_identical_5000", |b| {
        b.iter(|| black_box(engine.diff(black_box(&sbom), black_box(&sbom))));
    });
}

criterion_group!(
    benches,
    bench_parse_scaling,
    bench_evaluate_scaling,
    bench_diff_scaling,
    bench_diff_identical
);

criterion_main!(benches);
