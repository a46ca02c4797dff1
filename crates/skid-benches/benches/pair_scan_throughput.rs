// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Broad-phase pair scan throughput benchmarks.
//!
//! # Running
//!
//! ```sh
//! cargo bench --package skid-benches --bench pair_scan_throughput
//! ```
//!
//! # What This Measures
//!
//! - `pair_scan_single_set`: serial all-pairs scan over one box field
//! - `pair_scan_two_sets`: cross-set scan between two offset fields
//! - `pair_scan_parallel_baseline`: serial library scan vs a row-parallel
//!   rayon rendition of the same scan
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rayon::prelude::*;
use skid_geom::{overlaps, overlaps_between, Aabb, Vec2};
use std::{hint::black_box, time::Duration};

/// Lays out `n` boxes on a jittered unit grid.
///
/// Half-extents of 0.6 on unit spacing keep every box overlapping its row
/// and column neighbors, so the scan always finds work. The jitter is
/// index-derived, so every run sees the same field.
fn build_boxes(n: usize) -> Vec<Aabb> {
    let side = (n as f64).sqrt().ceil() as usize;
    let mut boxes = Vec::with_capacity(n);
    for i in 0..n {
        let col = (i % side) as f64;
        let row = (i / side) as f64;
        let jx = ((i * 31) % 17) as f64 * 0.01;
        let jy = ((i * 57) % 13) as f64 * 0.01;
        boxes.push(Aabb::from_center_half_extents(
            Vec2::new(col + jx, row + jy),
            0.6,
            0.6,
        ));
    }
    boxes
}

/// Row-parallel rendition of the library scan, used as a baseline only.
///
/// Rows split across the rayon pool; per-row hits concatenate in row order,
/// so the output matches the serial scan pair for pair.
fn parallel_overlaps(boxes: &[Aabb]) -> Vec<(usize, usize)> {
    boxes
        .par_iter()
        .enumerate()
        .flat_map_iter(|(i, a)| {
            let mut row = Vec::new();
            for (j, b) in boxes.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    row.push((i, j));
                }
            }
            row
        })
        .collect()
}

fn bench_single_set_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_scan_single_set");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(6));
    group.noise_threshold(0.02);
    for &n in &[64usize, 256, 1_024] {
        let boxes = build_boxes(n);
        // Candidate pairs visited by the scan, not boxes.
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &boxes, |b, boxes| {
            b.iter(|| black_box(overlaps(black_box(boxes))))
        });
    }
    group.finish();
}

fn bench_two_set_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_scan_two_sets");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(6));
    group.noise_threshold(0.02);
    for &n in &[64usize, 256, 1_024] {
        let first = build_boxes(n);
        // Offset by half a cell so roughly every box meets its counterpart.
        let second: Vec<Aabb> = first
            .iter()
            .map(|b| b.translated(Vec2::new(0.5, 0.5)))
            .collect();
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(first, second),
            |b, (first, second)| b.iter(|| black_box(overlaps_between(first, second))),
        );
    }
    group.finish();
}

fn bench_parallel_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_scan_parallel_baseline");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    for &n in &[256usize, 1_024] {
        let boxes = build_boxes(n);
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::new("serial", n), &boxes, |b, boxes| {
            b.iter(|| black_box(overlaps(boxes)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &boxes, |b, boxes| {
            b.iter(|| {
                let pairs = parallel_overlaps(boxes);
                debug_assert_eq!(pairs, overlaps(boxes));
                black_box(pairs)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_set_scan,
    bench_two_set_scan,
    bench_parallel_baseline
);
criterion_main!(benches);
