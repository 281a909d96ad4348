use criterion::{Criterion, black_box, criterion_group, criterion_main};
use varga_base::Division;
use varga_chart::{BaseChart, BodyInput, ChartConfig, VargaEngine};

fn sample() -> BaseChart {
    BaseChart::new(
        24.1,
        236.38,
        [
            BodyInput::new(280.6, 1.01),
            BodyInput::new(68.97, 13.2),
            BodyInput::new(337.1, 0.62),
            BodyInput::new(26.6, -0.41),
            BodyInput::new(119.1, 0.08),
            BodyInput::new(202.4, 1.22),
            BodyInput::new(354.1, 0.03),
            BodyInput::new(39.8, -0.05),
        ],
    )
}

fn chart_bench(c: &mut Criterion) {
    let engine = VargaEngine::new(&ChartConfig::default()).expect("default engine");
    let base = sample();

    let mut group = c.benchmark_group("chart");
    group.bench_function("d9", |b| {
        b.iter(|| engine.chart(black_box(&base), Division::D9))
    });
    group.bench_function("shodashavarga", |b| {
        b.iter(|| engine.charts(black_box(&base)))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
