use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fintrack::{
    core::reports,
    currency::CurrencyCode,
    ledger::{ExpenseCategory, InvestmentCategory, NewTransaction, TransactionKind},
    storage::MemoryStore,
    LedgerStore, MetricsEngine,
};

fn build_sample_store(txn_count: usize) -> LedgerStore {
    let mut store = LedgerStore::open(Box::new(MemoryStore::new()));
    store.set_budget(250_000.0, CurrencyCode::Usd).unwrap();
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 365) as i64);
        let amount = 10.0 + (idx % 100) as f64;
        let entry = if idx % 4 == 0 {
            let category = InvestmentCategory::ALL[idx % InvestmentCategory::ALL.len()];
            NewTransaction::new(category, amount, CurrencyCode::Usd)
        } else {
            let category = ExpenseCategory::ALL[idx % ExpenseCategory::ALL.len()];
            NewTransaction::new(category, amount, CurrencyCode::Usd)
        };
        store.add(entry.unwrap().on(date)).unwrap();
    }
    store
}

fn metrics_benchmark(c: &mut Criterion) {
    let store = build_sample_store(2_000);
    let ledger = store.ledger();

    c.bench_function("suggestions_2k", |b| {
        b.iter(|| MetricsEngine::suggestions(black_box(ledger)))
    });
    c.bench_function("by_category_2k", |b| {
        b.iter(|| MetricsEngine::by_category(black_box(ledger), TransactionKind::Expense))
    });
    c.bench_function("recent_2k", |b| {
        b.iter(|| reports::recent(black_box(ledger), TransactionKind::Expense, 5).len())
    });
}

criterion_group!(benches, metrics_benchmark);
criterion_main!(benches);
