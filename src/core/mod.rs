pub mod ledger_store;
pub mod metrics;
pub mod reports;

pub use ledger_store::LedgerStore;
pub use metrics::{
    CategoryBreakdown, CategoryTotal, MetricsEngine, Suggestion, SuggestionKind, SuggestionLevel,
};
