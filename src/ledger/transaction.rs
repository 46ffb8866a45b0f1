use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{Category, TransactionKind};
use crate::{
    currency::CurrencyCode,
    errors::{LedgerError, Result},
};

/// A recorded expense or investment. Fields are read-only once the ledger
/// store has assigned the id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredTransaction", into = "StoredTransaction")]
pub struct Transaction {
    id: Uuid,
    category: Category,
    amount: f64,
    currency: CurrencyCode,
    description: String,
    date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn from_entry(entry: NewTransaction, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            category: entry.category,
            amount: entry.amount,
            currency: entry.currency,
            description: entry.description,
            date: entry.date,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.category.kind()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for a new ledger entry. Construction validates the amount; the
/// category type guarantees the kind pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub category: Category,
    pub amount: f64,
    pub currency: CurrencyCode,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(category: impl Into<Category>, amount: f64, currency: CurrencyCode) -> Result<Self> {
        Ok(Self {
            category: category.into(),
            amount: validate_amount(amount)?,
            currency,
            description: String::new(),
            date: Utc::now().date_naive(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}

/// Parses user-supplied amount text, rejecting anything that is not a finite,
/// non-negative number.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
    validate_amount(value).map_err(|_| LedgerError::InvalidAmount(raw.to_string()))
}

pub fn validate_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount(amount.to_string()))
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

/// Persisted id: a UUID, or the millisecond timestamp older data used.
/// Timestamp ids map onto the UUID with the same integer value, so they stay
/// stable across reloads and are written back as UUIDs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredId {
    Uuid(Uuid),
    Timestamp(u64),
}

impl From<StoredId> for Uuid {
    fn from(id: StoredId) -> Self {
        match id {
            StoredId::Uuid(id) => id,
            StoredId::Timestamp(millis) => Uuid::from_u128(u128::from(millis)),
        }
    }
}

/// On-disk shape of a transaction: a flat object whose `type` and `category`
/// strings are re-validated on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTransaction {
    id: StoredId,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: f64,
    currency: CurrencyCode,
    category: String,
    #[serde(default)]
    description: String,
    date: NaiveDate,
    #[serde(rename = "timestamp")]
    created_at: DateTime<Utc>,
}

impl TryFrom<StoredTransaction> for Transaction {
    type Error = LedgerError;

    fn try_from(stored: StoredTransaction) -> Result<Self> {
        Ok(Self {
            id: stored.id.into(),
            category: Category::parse(stored.kind, &stored.category)?,
            amount: validate_amount(stored.amount)?,
            currency: stored.currency,
            description: stored.description,
            date: stored.date,
            created_at: stored.created_at,
        })
    }
}

impl From<Transaction> for StoredTransaction {
    fn from(txn: Transaction) -> Self {
        Self {
            id: StoredId::Uuid(txn.id),
            kind: txn.kind(),
            amount: txn.amount,
            currency: txn.currency,
            category: txn.category.as_str().to_string(),
            description: txn.description,
            date: txn.date,
            created_at: txn.created_at,
        }
    }
}
