//! Performance benchmarks for the commission deadline engine.
//!
//! Covers the pure calculator (single order, scaling over commission length)
//! and the HTTP path (`/derive` and a bulk recalculation over 1000 orders).
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tower::ServiceExt;

use commission_deadlines::api::{AppState, create_router};
use commission_deadlines::calculation::calculate_derived_fields;
use commission_deadlines::calendar::{FixedClock, count_business_days};
use commission_deadlines::config::{ConfigLoader, DeadlineRules};
use commission_deadlines::models::{Official, Order, OrderDate, OrderRecord};
use commission_deadlines::service::OrderService;
use commission_deadlines::store::{InMemoryStore, RecordStore};
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn order(start: NaiveDate, end: NaiveDate) -> Order {
    Order {
        order_number: 1,
        start_date: OrderDate::Active(start),
        end_date: OrderDate::Active(end),
        legalization_date: None,
        daily_allowance: Decimal::new(180_000, 0),
        order_allowance_total: Decimal::new(540_000, 0),
        order_expense_total: Decimal::new(60_000, 0),
        legalized_allowance_total: None,
        legalized_expense_total: None,
    }
}

fn record(order_number: u64) -> OrderRecord {
    serde_json::from_value(serde_json::json!({
        "order_number": order_number,
        "rec": 1,
        "start_date": "15/12/2025",
        "end_date": "19/12/2025",
        "number_of_days": 5,
        "official": {
            "identification_number": 1000 + order_number,
            "first_name": "ANA",
            "first_surname": "PEREZ"
        }
    }))
    .expect("Failed to build order record")
}

/// Benchmark: derive one order against the full holiday calendar.
fn bench_single_order(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config/colombia").expect("Failed to load config");
    let holidays = loader.holiday_set();
    let rules = loader.deadline_rules();
    let subject = order(date(2025, 12, 15), date(2025, 12, 19));
    let today = date(2025, 12, 30);

    c.bench_function("single_order", |b| {
        b.iter(|| {
            black_box(calculate_derived_fields(
                black_box(&subject),
                &holidays,
                today,
                &rules,
            ))
        })
    });
}

/// Benchmark: business-day counting over growing spans.
fn bench_count_scaling(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config/colombia").expect("Failed to load config");
    let holidays = loader.holiday_set();
    let start = date(2025, 1, 1);

    let mut group = c.benchmark_group("count_business_days");
    for span in [7_i64, 30, 90, 365, 730].iter() {
        let end = start + chrono::Duration::days(*span);
        group.throughput(Throughput::Elements(*span as u64));
        group.bench_with_input(BenchmarkId::new("days", span), span, |b, _| {
            b.iter(|| black_box(count_business_days(start, end, &holidays)))
        });
    }
    group.finish();
}

/// Benchmark: POST /derive through the router.
fn bench_derive_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = Arc::new(InMemoryStore::new());
    let service = OrderService::new(
        store,
        Arc::new(FixedClock::new(date(2025, 1, 8))),
        DeadlineRules::default(),
    );
    let router = create_router(AppState::new(service));
    let body = serde_json::json!({
        "order": { "start_date": "06/01/2025", "end_date": "10/01/2025" },
        "holidays": ["2025-01-01", "2025-01-06"]
    })
    .to_string();

    c.bench_function("derive_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/derive")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: bulk recalculation of 1000 stored orders.
fn bench_recalculate_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let loader = ConfigLoader::load("./config/colombia").expect("Failed to load config");
    let store = Arc::new(InMemoryStore::with_holidays(loader.holiday_entries().to_vec()));
    rt.block_on(async {
        for number in 1..=1000 {
            store.insert_order(record(number)).await.unwrap();
        }
    });
    let service = OrderService::new(
        store,
        Arc::new(FixedClock::new(date(2025, 12, 30))),
        loader.deadline_rules(),
    );

    let mut group = c.benchmark_group("bulk_recalculation");
    group.throughput(Throughput::Elements(1000));
    group.sample_size(10);
    group.bench_function("recalculate_1000", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(service.recalculate_all().await.unwrap()) })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_order,
    bench_count_scaling,
    bench_derive_endpoint,
    bench_recalculate_1000,
);
criterion_main!(benches);
