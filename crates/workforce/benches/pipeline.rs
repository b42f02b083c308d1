//! Benchmarks for normalization, cohort selection and metric computation.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use workforce::{
    Dedup, MetricRegistry, Query, RawRow, YearFilter, cohort::is_leaver, columns::ColumnSet,
    load::Dataset, normalize, select_cohort,
};

const GENDERS: [&str; 3] = ["Female", "male", "F"];
const GENERATIONS: [&str; 4] = ["Baby Boomer", "Gen X", "gen z", "Millennials"];
const POSITIONS: [&str; 3] = ["Associate", "Manager & Up", "Intern"];
const STATUSES: [&str; 3] = ["ACTIVE", "active ", "LEAVER"];

/// Synthetic snapshot rows: roughly one person per four rows, spread over
/// the reporting window.
fn synthetic_rows(count: usize, seed: u64) -> Vec<RawRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let person = rng.gen_range(0..count / 4 + 1);
            let year = rng.gen_range(2019..=2026);
            let month = rng.gen_range(1..=12);
            RawRow::named(format!("employee {person}"))
                .gender(GENDERS[rng.gen_range(0..GENDERS.len())])
                .generation(GENERATIONS[rng.gen_range(0..GENERATIONS.len())])
                .position(POSITIONS[rng.gen_range(0..POSITIONS.len())])
                .status(STATUSES[rng.gen_range(0..STATUSES.len())])
                .calendar_year(format!("{year}-01-01"))
                .resignation_date(format!("{year}-{month:02}-15"))
                .year_joined(rng.gen_range(2010..=2025).to_string())
                .tenure(format!("{:.1}", rng.gen_range(0.0..30.0)))
                .promoted(if rng.gen_bool(0.15) { "1" } else { "0" })
                .age(rng.gen_range(20..65).to_string())
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let rows = synthetic_rows(10_000, 7);
    c.bench_function("normalize_10k", |b| b.iter(|| normalize(black_box(&rows))));
}

fn bench_select_cohort(c: &mut Criterion) {
    let records = normalize(&synthetic_rows(10_000, 11));
    c.bench_function("distinct_leavers_10k", |b| {
        b.iter(|| {
            select_cohort(
                black_box(&records),
                YearFilter::All,
                Dedup::ByIdentityAndYear,
                is_leaver,
            )
        })
    });
}

fn bench_compute_all(c: &mut Criterion) {
    let dataset = Dataset::from_rows(&synthetic_rows(10_000, 13), ColumnSet::all());
    let registry = MetricRegistry::with_defaults();
    let query = Query::new(YearFilter::Year(2023));
    c.bench_function("compute_all_10k", |b| {
        b.iter(|| registry.compute_all(black_box(&dataset), &query))
    });
}

criterion_group!(benches, bench_normalize, bench_select_cohort, bench_compute_all);
criterion_main!(benches);
