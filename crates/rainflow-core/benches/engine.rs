use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rainflow_common::{ClassParameters, IntegerCounter, ResiduePolicy, WohlerParameters};
use rainflow_core::RainflowEngine;

fn synthetic_stream(len: usize, class_count: u32, width: f64, offset: f64) -> Vec<f64> {
    // Deterministic pseudo-random walk clamped to the valid class range,
    // so the stream exercises the filter without tripping OutOfRange.
    let upper = offset + class_count as f64 * width;
    let mut value = offset + (class_count as f64 * width) / 2.0;
    let mut state: u64 = 0x2545F4914F6CDD1D;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let step = ((state % 1000) as f64 / 1000.0 - 0.5) * width * 4.0;
            value = (value + step).clamp(offset, upper - width * 0.001);
            value
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("RainflowEngine");

    for &len in &[1_000usize, 10_000, 100_000] {
        let cp = ClassParameters::new(64, 1.0, 0.0, 0.99).unwrap();
        let stream = synthetic_stream(len, 64, 1.0, 0.0);

        group.bench_with_input(BenchmarkId::new("feed_and_finalize", len), &len, |b, _| {
            b.iter_batched(
                || {
                    RainflowEngine::<IntegerCounter>::new(
                        cp,
                        WohlerParameters::default(),
                        ResiduePolicy::None,
                    )
                    .unwrap()
                },
                |mut engine| {
                    engine.feed(black_box(&stream)).unwrap();
                    engine.finalize().unwrap();
                    black_box(engine.damage());
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
