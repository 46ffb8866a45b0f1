use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// The two flavours of ledger activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Investment,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Investment => "investment",
        }
    }

    /// Category labels valid for this kind, in display order.
    pub fn category_names(&self) -> Vec<&'static str> {
        match self {
            TransactionKind::Expense => ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect(),
            TransactionKind::Investment => {
                InvestmentCategory::ALL.iter().map(|c| c.as_str()).collect()
            }
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" | "expenses" => Ok(TransactionKind::Expense),
            "investment" | "investments" => Ok(TransactionKind::Investment),
            _ => Err(LedgerError::UnknownKind(value.to_string())),
        }
    }
}

macro_rules! category_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Exact (case-insensitive) label lookup with a closest-match hint on failure.
            pub fn parse(value: &str) -> Result<Self> {
                let wanted = value.trim();
                if let Some(found) = Self::ALL
                    .iter()
                    .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
                {
                    return Ok(*found);
                }
                Err(LedgerError::UnknownCategory {
                    kind: $kind,
                    name: value.to_string(),
                    hint: closest_label(wanted, Self::ALL.iter().map(|c| c.as_str())),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

category_enum!(
    /// Spending categories offered for expense entries.
    ExpenseCategory, "expense", {
        FoodAndDining => "Food & Dining",
        Transportation => "Transportation",
        Housing => "Housing",
        Utilities => "Utilities",
        Entertainment => "Entertainment",
        Shopping => "Shopping",
        Healthcare => "Healthcare",
        Education => "Education",
        Subscriptions => "Subscriptions",
        Insurance => "Insurance",
        Taxes => "Taxes",
        Other => "Other",
    }
);

category_enum!(
    /// Asset classes offered for investment entries.
    InvestmentCategory, "investment", {
        Stocks => "Stocks",
        Bonds => "Bonds",
        RealEstate => "Real Estate",
        Cryptocurrency => "Cryptocurrency",
        MutualFunds => "Mutual Funds",
        Etfs => "ETFs",
        Commodities => "Commodities",
        PreciousMetals => "Precious Metals",
        StartupInvestment => "Startup Investment",
        Other => "Other",
    }
);

/// A category tagged with the kind it belongs to. A transaction's kind is
/// derived from this, so a mismatched pairing cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Expense(ExpenseCategory),
    Investment(InvestmentCategory),
}

impl Category {
    pub fn parse(kind: TransactionKind, name: &str) -> Result<Self> {
        match kind {
            TransactionKind::Expense => ExpenseCategory::parse(name).map(Category::Expense),
            TransactionKind::Investment => {
                InvestmentCategory::parse(name).map(Category::Investment)
            }
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Category::Expense(_) => TransactionKind::Expense,
            Category::Investment(_) => TransactionKind::Investment,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Expense(category) => category.as_str(),
            Category::Investment(category) => category.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExpenseCategory> for Category {
    fn from(category: ExpenseCategory) -> Self {
        Category::Expense(category)
    }
}

impl From<InvestmentCategory> for Category {
    fn from(category: InvestmentCategory) -> Self {
        Category::Investment(category)
    }
}

const HINT_THRESHOLD: f64 = 0.7;

fn closest_label(wanted: &str, labels: impl Iterator<Item = &'static str>) -> Option<&'static str> {
    let wanted = wanted.to_lowercase();
    labels
        .map(|label| (label, strsim::jaro_winkler(&wanted, &label.to_lowercase())))
        .filter(|(_, score)| *score >= HINT_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(label, _)| label)
}
