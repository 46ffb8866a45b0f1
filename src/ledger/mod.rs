//! Ledger domain models and persistence-friendly types.

pub mod budget;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use budget::BudgetConfig;
pub use category::{Category, ExpenseCategory, InvestmentCategory, TransactionKind};
pub use ledger::Ledger;
pub use transaction::{parse_amount, parse_date, NewTransaction, Transaction};
