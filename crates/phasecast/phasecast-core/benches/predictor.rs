//! Benchmark suite for the phase forecasting pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phasecast_core::smoothing::DampedHoltWinters;
use phasecast_core::{PowerPredictor, Predictor};
use phasecast_spi::{PredictorConfig, RawRecord};

fn create_records(days: usize) -> Vec<RawRecord> {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..days)
        .map(|i| {
            let weekly = ((i % 7) as f64 * std::f64::consts::TAU / 7.0).sin() * 15.0;
            let base = 120.0 + i as f64 * 0.2 + weekly;
            let date = start + chrono::Duration::days(i as i64);
            RawRecord::new(
                &date.format("%Y-%m-%d").to_string(),
                base,
                base * 1.1,
                base * 0.9,
            )
        })
        .collect()
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("PowerPredictor");

    for days in [7, 25, 60].iter() {
        let records = create_records(*days);

        group.bench_with_input(BenchmarkId::new("sequential", days), &records, |b, records| {
            let predictor = PowerPredictor::new(PredictorConfig {
                parallel: false,
                ..Default::default()
            })
            .unwrap();
            b.iter(|| predictor.predict(black_box(records)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", days), &records, |b, records| {
            let predictor = PowerPredictor::default();
            b.iter(|| predictor.predict(black_box(records)));
        });
    }

    group.finish();
}

fn bench_holt_winters_fit(c: &mut Criterion) {
    let data: Vec<f64> = (0..25)
        .map(|i| 100.0 + 10.0 * ((i % 7) as f64) + i as f64 * 0.5)
        .collect();

    c.bench_function("DampedHoltWinters::fit/25", |b| {
        b.iter(|| {
            let mut model = DampedHoltWinters::new(7).unwrap();
            model.fit(black_box(&data)).unwrap();
            model.forecast().unwrap()
        })
    });
}

criterion_group!(benches, bench_predict, bench_holt_winters_fit);
criterion_main!(benches);
