//! Benchmarks for polygon clipping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ringclip::polygon::{clip, sutherland_hodgman, ClipMode, Polygon};

/// Generates a star polygon with alternating outer/inner radii.
///
/// Concave for `inner < outer`, counter-clockwise, rotated by `phase`.
fn star(spikes: usize, outer: f64, inner: f64, phase: f64) -> Polygon<f64> {
    let n = spikes * 2;
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = phase + i as f64 / n as f64 * 2.0 * std::f64::consts::PI;
            let r = if i % 2 == 0 { outer } else { inner };
            (r * angle.cos(), r * angle.sin())
        })
        .collect();
    Polygon::from_coords(&coords)
}

/// Generates a regular (convex) polygon.
fn regular(sides: usize, radius: f64, center: (f64, f64)) -> Polygon<f64> {
    let coords: Vec<(f64, f64)> = (0..sides)
        .map(|i| {
            let angle = i as f64 / sides as f64 * 2.0 * std::f64::consts::PI;
            (
                center.0 + radius * angle.cos(),
                center.1 + radius * angle.sin(),
            )
        })
        .collect();
    Polygon::from_coords(&coords)
}

fn bench_general_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_general");

    for spikes in [4, 16, 64] {
        let subject = star(spikes, 1.0, 0.5, 0.0);
        // Rotated and slightly scaled so the boundaries genuinely cross.
        let window = star(spikes, 1.1, 0.55, 0.4 / spikes as f64);
        group.throughput(Throughput::Elements((spikes * 2) as u64));

        group.bench_with_input(
            BenchmarkId::new("entry_exit", spikes),
            &(&subject, &window),
            |b, &(s, w)| b.iter(|| clip(black_box(s), black_box(w), ClipMode::EntryExit).unwrap()),
        );

        let window_cw = window.reversed();
        group.bench_with_input(
            BenchmarkId::new("inbound_outbound", spikes),
            &(&subject, &window_cw),
            |b, &(s, w)| {
                b.iter(|| clip(black_box(s), black_box(w), ClipMode::InboundOutbound).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_convex_fast_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_convex");

    for sides in [8, 32, 128] {
        let subject = regular(sides, 1.0, (0.0, 0.0));
        let window = regular(sides, 1.0, (0.3, 0.2));
        group.throughput(Throughput::Elements(sides as u64));

        group.bench_with_input(
            BenchmarkId::new("sutherland_hodgman", sides),
            &(&subject, &window),
            |b, &(s, w)| b.iter(|| sutherland_hodgman(black_box(s), black_box(w))),
        );

        group.bench_with_input(
            BenchmarkId::new("general_engine", sides),
            &(&subject, &window),
            |b, &(s, w)| b.iter(|| clip(black_box(s), black_box(w), ClipMode::EntryExit).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_general_engine, bench_convex_fast_path);
criterion_main!(benches);
