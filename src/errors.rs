use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid amount `{0}`: expected a non-negative number")]
    InvalidAmount(String),
    #[error("Unknown transaction type `{0}` (expected `expense` or `investment`)")]
    UnknownKind(String),
    #[error("Unknown {kind} category `{name}`{}", hint_suffix(.hint))]
    UnknownCategory {
        kind: &'static str,
        name: String,
        hint: Option<&'static str>,
    },
    #[error("Unsupported currency `{0}`")]
    UnknownCurrency(String),
    #[error("Invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    match hint {
        Some(name) => format!(" (did you mean `{name}`?)"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
