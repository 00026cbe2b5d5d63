use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use framematch_rs::image_pipeline::{CumulativeHistogram, Histogram, Lut, RgbFrame};

fn generate_mock_frame(width: usize, height: usize, shift: usize) -> RgbFrame {
    RgbFrame::from_fn(width, height, |x, y| {
        [
            ((x + y + shift) % 256) as u8,
            ((x * 3 + shift) % 256) as u8,
            ((y * 5 + shift) % 256) as u8,
        ]
    })
}

fn benchmark_histogram_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let frame = generate_mock_frame(width, height, 0);

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| Histogram::from_frame(black_box(frame)))
        });
    }

    group.finish();
}

fn benchmark_lut_build(c: &mut Criterion) {
    let source = CumulativeHistogram::from_frame(&generate_mock_frame(256, 256, 17)).unwrap();
    let reference = CumulativeHistogram::from_frame(&generate_mock_frame(256, 256, 0)).unwrap();

    c.bench_function("lut_matching", |b| {
        b.iter(|| Lut::matching(black_box(&source), black_box(&reference)))
    });
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_frame");
    group.sample_size(20);

    let reference = CumulativeHistogram::from_frame(&generate_mock_frame(1920, 1080, 0)).unwrap();
    let frame = generate_mock_frame(1920, 1080, 40);

    group.bench_function("1920x1080", |b| {
        b.iter(|| {
            let source = CumulativeHistogram::from_frame(black_box(&frame)).unwrap();
            Lut::matching(&source, &reference).apply(&frame)
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_histogram_sizes, benchmark_lut_build, benchmark_full_frame);
criterion_main!(benches);
