//! Performance benchmarks for the Tool Box calculation engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Short business-day deadline (10 días hábiles): < 10μs mean
//! - Five-year prescription walk (1825 días corridos): < 1ms mean
//! - Single settlement computation: < 10μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use toolbox_engine::calculation::{compute_end_date, compute_settlement};
use toolbox_engine::config::ConfigLoader;
use toolbox_engine::models::{DayCountRule, SettlementCase, TerminationCause, VariableRemuneration};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid benchmark date")
}

fn business_needs_case() -> SettlementCase {
    SettlementCase {
        hire_date: NaiveDate::from_ymd_opt(2015, 3, 16).expect("valid benchmark date"),
        termination_date: NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid benchmark date"),
        cause: TerminationCause::BusinessNeeds,
        vacation_days_taken: 45,
        base_salary: Decimal::new(1_250_000, 0),
        other_taxable_income: Decimal::new(80_000, 0),
        other_non_taxable_income: Decimal::new(60_000, 0),
        variable_remuneration: Some(VariableRemuneration {
            first_prior_month: Decimal::new(150_000, 0),
            second_prior_month: Decimal::new(220_000, 0),
            third_prior_month: Decimal::new(90_000, 0),
        }),
    }
}

fn bench_deadline_walks(c: &mut Criterion) {
    let calendar = ConfigLoader::embedded().calendar();
    let mut group = c.benchmark_group("deadline");

    for day_count in [10u32, 60, 1825] {
        group.throughput(Throughput::Elements(u64::from(day_count)));
        group.bench_with_input(
            BenchmarkId::new("habiles", day_count),
            &day_count,
            |b, &day_count| {
                b.iter(|| {
                    compute_end_date(
                        black_box(start_date()),
                        black_box(day_count),
                        DayCountRule::Business,
                        &calendar,
                    )
                    .expect("benchmark walk succeeds")
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("corridos", day_count),
            &day_count,
            |b, &day_count| {
                b.iter(|| {
                    compute_end_date(
                        black_box(start_date()),
                        black_box(day_count),
                        DayCountRule::Calendar,
                        &calendar,
                    )
                    .expect("benchmark walk succeeds")
                })
            },
        );
    }
    group.finish();
}

fn bench_settlement(c: &mut Criterion) {
    let case = business_needs_case();
    c.bench_function("settlement/business_needs", |b| {
        b.iter(|| compute_settlement(black_box(&case)).expect("benchmark case is valid"))
    });
}

fn bench_session_setup(c: &mut Criterion) {
    let config = ConfigLoader::embedded();
    c.bench_function("session/new", |b| b.iter(|| black_box(config.new_session())));
}

criterion_group!(
    benches,
    bench_deadline_walks,
    bench_settlement,
    bench_session_setup
);
criterion_main!(benches);
