use criterion::{Criterion, black_box, criterion_group, criterion_main};

use saju_ganji::{FourPillars, Pillar};
use saju_sinsal::{catalog, match_chart};

fn matcher_bench(c: &mut Criterion) {
    let chart = FourPillars::parse("丙子 壬辰 丙申 乙未").expect("fixed chart");

    let mut group = c.benchmark_group("sinsal_matcher");
    group.bench_function("match_chart", |b| {
        b.iter(|| match_chart(black_box(chart)))
    });
    group.bench_function("match_chart_full_cycle", |b| {
        // Sweep the day pillar through the whole 60-cycle.
        b.iter(|| {
            for n in 0..60u8 {
                let day = Pillar::from_gapja(n);
                let swept = FourPillars::new(chart.year(), chart.month(), day, chart.hour());
                black_box(match_chart(swept));
            }
        })
    });
    group.finish();
}

fn catalog_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sinsal_catalog");
    group.bench_function("catalog_lookup", |b| b.iter(|| black_box(catalog().len())));
    group.finish();
}

criterion_group!(benches, matcher_bench, catalog_bench);
criterion_main!(benches);
