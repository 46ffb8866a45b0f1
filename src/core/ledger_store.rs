use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    currency::CurrencyCode,
    errors::Result,
    ledger::{transaction::validate_amount, BudgetConfig, Ledger, NewTransaction, Transaction},
    storage::{KeyValueStore, BUDGET_KEY, DISPLAY_CURRENCY_KEY, TRANSACTIONS_KEY},
};

/// Owns the ledger and writes every mutation through to the backing store.
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn KeyValueStore>,
}

impl LedgerStore {
    /// Builds a store over `storage` and loads whatever it already holds.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self {
            ledger: Ledger::default(),
            storage,
        };
        store.load();
        store
    }

    /// Re-reads persisted state. Missing or unreadable keys fall back to
    /// their defaults; this never fails.
    pub fn load(&mut self) -> &Ledger {
        let transactions = self.read_transactions();
        let mut budget: BudgetConfig = self.read_or_default(BUDGET_KEY);
        if validate_amount(budget.amount).is_err() {
            warn!(amount = budget.amount, "persisted budget amount invalid, resetting");
            budget = BudgetConfig::default();
        }
        let display_currency: CurrencyCode = self.read_or_default(DISPLAY_CURRENCY_KEY);
        self.ledger = Ledger::new(transactions, budget, display_currency);
        debug!(
            transactions = self.ledger.transaction_count(),
            budget = self.ledger.budget().amount,
            "ledger loaded"
        );
        &self.ledger
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.ledger.transaction(id)
    }

    pub fn budget(&self) -> &BudgetConfig {
        self.ledger.budget()
    }

    pub fn display_currency(&self) -> CurrencyCode {
        self.ledger.display_currency()
    }

    /// Records a new entry, stamping its id and creation time.
    pub fn add(&mut self, entry: NewTransaction) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let transaction = Transaction::from_entry(entry, id, chrono::Utc::now());
        info!(
            %id,
            kind = %transaction.kind(),
            category = %transaction.category(),
            amount = transaction.amount(),
            "transaction added"
        );
        self.ledger.push(transaction);
        self.persist_transactions()?;
        Ok(id)
    }

    /// Deletes the transaction with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: Uuid) -> Result<Option<Transaction>> {
        let removed = self.ledger.remove(id);
        match &removed {
            Some(_) => info!(%id, "transaction removed"),
            None => debug!(%id, "remove ignored unknown transaction"),
        }
        self.persist_transactions()?;
        Ok(removed)
    }

    pub fn set_budget(&mut self, amount: f64, currency: CurrencyCode) -> Result<()> {
        let budget = BudgetConfig::new(amount, currency)?;
        info!(amount, %currency, "budget threshold updated");
        self.ledger.set_budget(budget);
        self.write(BUDGET_KEY, &budget)
    }

    /// Restores the zero-value budget threshold.
    pub fn reset_budget(&mut self) -> Result<()> {
        info!("budget threshold reset");
        let budget = BudgetConfig::default();
        self.ledger.set_budget(budget);
        self.write(BUDGET_KEY, &budget)
    }

    pub fn set_display_currency(&mut self, code: CurrencyCode) -> Result<()> {
        info!(%code, "display currency updated");
        self.ledger.set_display_currency(code);
        self.write(DISPLAY_CURRENCY_KEY, &code)
    }

    fn persist_transactions(&mut self) -> Result<()> {
        let data = serde_json::to_string(self.ledger.transactions())?;
        self.storage.set(TRANSACTIONS_KEY, &data)
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let data = serde_json::to_string(value)?;
        self.storage.set(key, &data)
    }

    /// Decodes the transaction array record by record, so one invalid entry
    /// does not take the rest of the history down with it.
    fn read_transactions(&self) -> Vec<Transaction> {
        let records: Vec<serde_json::Value> = self.read_or_default(TRANSACTIONS_KEY);
        let total = records.len();
        let transactions: Vec<Transaction> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(txn) => Some(txn),
                Err(err) => {
                    warn!(index, error = %err, "skipping unreadable transaction record");
                    None
                }
            })
            .collect();
        if transactions.len() < total {
            warn!(
                kept = transactions.len(),
                skipped = total - transactions.len(),
                "some persisted transactions were dropped"
            );
        }
        transactions
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted value, using default");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "persisted value did not parse, using default");
                T::default()
            }
        }
    }
}
