#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use fintrack::{
    currency::CurrencyCode,
    ledger::{ExpenseCategory, InvestmentCategory, NewTransaction},
    storage::JsonFileStore,
    LedgerStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a store backed by a unique directory; returns the directory so a
/// test can reopen it.
pub fn setup_test_store() -> (LedgerStore, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let dir = temp.path().join("store");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    (reopen(&dir), dir)
}

pub fn reopen(dir: &PathBuf) -> LedgerStore {
    let backend = JsonFileStore::new(dir.clone()).expect("create json file store");
    LedgerStore::open(Box::new(backend))
}

pub fn expense(category: ExpenseCategory, amount: f64) -> NewTransaction {
    NewTransaction::new(category, amount, CurrencyCode::Usd).expect("valid expense")
}

pub fn investment(category: InvestmentCategory, amount: f64) -> NewTransaction {
    NewTransaction::new(category, amount, CurrencyCode::Usd).expect("valid investment")
}
