use chrono::{FixedOffset, TimeZone};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sidereal_base::GeoLocation;
use sidereal_chart::{ChartConfig, build_chart_at, build_chart_in_zone};
use sidereal_core::{ALL_PROVIDER_BODIES, PositionTable};

fn table() -> PositionTable {
    ALL_PROVIDER_BODIES
        .iter()
        .enumerate()
        .fold(PositionTable::new(), |t, (i, &b)| {
            t.with_longitude(b, (i as f64 * 37.1) % 360.0)
        })
        .with_earth_vector([-0.995_933, -0.003_509, -0.001_521])
}

fn chart_bench(c: &mut Criterion) {
    let provider = table();
    let config = ChartConfig::default();
    let tz = FixedOffset::east_opt(12_600).unwrap();
    let location = GeoLocation::new(35.6892, 51.389).unwrap();
    let civil = tz.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_chart_at", |b| {
        b.iter(|| build_chart_at(&provider, black_box(location), black_box(civil), &config))
    });
    group.bench_function("build_chart_in_zone", |b| {
        b.iter(|| {
            build_chart_in_zone(
                &provider,
                black_box(35.6892),
                black_box(51.389),
                black_box("2024-03-20T12:00:00"),
                &tz,
                &config,
            )
        })
    });
    let chart = build_chart_at(&provider, location, civil, &config).unwrap();
    group.bench_function("aspects", |b| b.iter(|| black_box(&chart).aspects()));
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
