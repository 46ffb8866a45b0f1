pub mod json_backend;
pub mod memory;

use crate::errors::Result;

/// Key holding the JSON array of transactions.
pub const TRANSACTIONS_KEY: &str = "financeTransactions";
/// Key holding the `{amount, currency}` budget threshold object.
pub const BUDGET_KEY: &str = "financeBudgetThreshold";
/// Key holding the display currency as a JSON string.
pub const DISPLAY_CURRENCY_KEY: &str = "financeMainCurrency";

/// String-keyed store of JSON-encoded values. Each write replaces the whole
/// value for its key.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
