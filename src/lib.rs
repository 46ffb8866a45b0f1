#![doc(test(attr(deny(warnings))))]

//! fintrack keeps a ledger of expenses and investments against a budget
//! threshold and derives totals, category breakdowns and spending
//! suggestions from it.

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::{LedgerStore, MetricsEngine};
pub use errors::{LedgerError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("fintrack tracing initialized.");
    });
}
