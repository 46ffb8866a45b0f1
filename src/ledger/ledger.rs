use uuid::Uuid;

use super::{
    budget::BudgetConfig,
    category::TransactionKind,
    transaction::Transaction,
};
use crate::currency::CurrencyCode;

/// Snapshot of everything the tracker knows: transactions in insertion
/// order, the budget threshold and the preferred display currency.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    budget: BudgetConfig,
    display_currency: CurrencyCode,
}

impl Ledger {
    pub fn new(
        transactions: Vec<Transaction>,
        budget: BudgetConfig,
        display_currency: CurrencyCode,
    ) -> Self {
        Self {
            transactions,
            budget,
            display_currency,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn of_kind(&self, kind: TransactionKind) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions
            .iter()
            .filter(move |txn| txn.kind() == kind)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn budget(&self) -> &BudgetConfig {
        &self.budget
    }

    pub fn display_currency(&self) -> CurrencyCode {
        self.display_currency
    }

    pub(crate) fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub(crate) fn remove(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id() == id)?;
        Some(self.transactions.remove(index))
    }

    pub(crate) fn set_budget(&mut self, budget: BudgetConfig) {
        self.budget = budget;
    }

    pub(crate) fn set_display_currency(&mut self, code: CurrencyCode) {
        self.display_currency = code;
    }
}
