use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bedwars_stats::stats::{aggregate, default_schema, Counter, RawCounters};
use bedwars_stats::progression::compute_level;

/// Every counter of every mode populated, like a long-time player's document
fn full_counters() -> RawCounters {
    let mut raw = RawCounters::new();
    for mode in &default_schema().modes {
        for prefix in &mode.prefixes {
            for (n, counter) in Counter::ALL.iter().enumerate() {
                raw.insert(counter.key(prefix), 1_000 + n as u64);
            }
        }
    }
    raw
}

fn bench_aggregate(c: &mut Criterion) {
    let raw = full_counters();
    let schema = default_schema();
    c.bench_function("aggregate_full_player", |b| {
        b.iter(|| aggregate(black_box(&raw), schema))
    });
    c.bench_function("aggregate_empty_player", |b| {
        b.iter(|| aggregate(black_box(&RawCounters::new()), schema))
    });
}

fn bench_compute_level(c: &mut Criterion) {
    c.bench_function("compute_level_prestige_10", |b| {
        b.iter(|| compute_level(black_box(4_870_000 + 123_456)))
    });
}

criterion_group!(benches, bench_aggregate, bench_compute_level);
criterion_main!(benches);
