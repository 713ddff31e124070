use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vaas_ephem::{
    Body, PositionSource, SeriesEphemeris, lahiri_ayanamsha_deg, moon_equatorial, position_of,
    sun_equatorial,
};

fn position_bench(c: &mut Criterion) {
    let jd = 2_460_478.5;

    let mut group = c.benchmark_group("series_position");
    group.bench_function("sun", |b| b.iter(|| position_of(Body::Sun, black_box(jd))));
    group.bench_function("moon", |b| b.iter(|| position_of(Body::Moon, black_box(jd))));
    group.bench_function("moon_via_source", |b| {
        b.iter(|| SeriesEphemeris.position(Body::Moon, black_box(jd)))
    });
    group.finish();
}

fn equatorial_bench(c: &mut Criterion) {
    let jd = 2_460_478.5;

    let mut group = c.benchmark_group("equatorial");
    group.bench_function("sun_equatorial", |b| b.iter(|| sun_equatorial(black_box(jd))));
    group.bench_function("moon_equatorial", |b| b.iter(|| moon_equatorial(black_box(jd))));
    group.bench_function("lahiri", |b| b.iter(|| lahiri_ayanamsha_deg(black_box(jd))));
    group.finish();
}

criterion_group!(benches, position_bench, equatorial_bench);
criterion_main!(benches);
