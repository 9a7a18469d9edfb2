//! Benchmarks for resume segmentation performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic line streams of increasing length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resume_outline::{segment, segment_batch, Line, SegmentOptions};

/// Creates a synthetic resume with the given number of experience entries.
fn create_test_resume(entries: usize) -> Vec<Line> {
    let mut lines = vec![
        Line::new("Jane Doe", 10.0),
        Line::new("jane@example.com | +1 555 0100", 10.0),
        Line::new("EXPERIENCE", 14.0).with_bold(1.0),
    ];

    let mut y = 700.0;
    for i in 0..entries {
        lines.push(Line::new(format!("Engineer {}, Company {}", i, i), 12.0).with_bold(0.9).at(72.0, y));
        lines.push(Line::new(format!("Jan {} - Dec {}", 2000 + i, 2001 + i), 10.0).at(72.0, y - 14.0));
        for j in 0..4 {
            lines.push(
                Line::new(format!("• Delivered milestone {} of project {}", j, i), 10.0)
                    .at(80.0, y - 26.0 - 12.0 * j as f64),
            );
        }
        y -= 90.0;
    }

    lines.push(Line::new("SKILLS", 14.0).with_bold(1.0));
    lines.push(Line::new("Rust, Go, SQL, Kubernetes", 10.0));
    lines
}

/// Benchmark single-document segmentation at various sizes.
fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    let options = SegmentOptions::default();

    for entries in [1, 10, 100].iter() {
        let lines = create_test_resume(*entries);

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| segment(black_box(lines.clone()), &options));
        });
    }

    group.finish();
}

/// Benchmark batch segmentation, parallel and sequential.
fn bench_batch(c: &mut Criterion) {
    let documents: Vec<_> = (0..32).map(|_| create_test_resume(10)).collect();
    let parallel = SegmentOptions::default();
    let sequential = SegmentOptions::new().sequential();

    c.bench_function("batch_parallel", |b| {
        b.iter(|| segment_batch(black_box(documents.clone()), &parallel));
    });

    c.bench_function("batch_sequential", |b| {
        b.iter(|| segment_batch(black_box(documents.clone()), &sequential));
    });
}

criterion_group!(benches, bench_segment, bench_batch);
criterion_main!(benches);
