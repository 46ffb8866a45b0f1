use std::fmt;

use crate::ledger::{Category, Ledger, TransactionKind};

/// Spending above this share of the budget triggers the near-limit warning.
pub const NEAR_LIMIT_RATIO: f64 = 0.9;
/// A single category above this share of total spending is called out.
pub const TOP_CATEGORY_SHARE: f64 = 0.4;
/// Investments below this share of total spending prompt a nudge.
pub const INVESTMENT_TARGET_RATIO: f64 = 0.2;

/// Pure derivations over a ledger snapshot.
pub struct MetricsEngine;

impl MetricsEngine {
    pub fn total_spent(ledger: &Ledger) -> f64 {
        Self::total_of(ledger, TransactionKind::Expense)
    }

    pub fn total_invested(ledger: &Ledger) -> f64 {
        Self::total_of(ledger, TransactionKind::Investment)
    }

    /// Budget left after expenses; negative once over budget.
    pub fn remaining(ledger: &Ledger) -> f64 {
        ledger.budget().amount - Self::total_spent(ledger)
    }

    pub fn by_category(ledger: &Ledger, kind: TransactionKind) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::default();
        for txn in ledger.of_kind(kind) {
            breakdown.add(txn.category(), txn.amount());
        }
        breakdown
    }

    /// Spent as a percentage of the budget. Zero when no budget is set.
    pub fn budget_percentage(ledger: &Ledger) -> f64 {
        let budget = ledger.budget();
        if budget.is_unset() {
            0.0
        } else {
            100.0 * Self::total_spent(ledger) / budget.amount
        }
    }

    /// Evaluates every heuristic independently, in a fixed order.
    pub fn suggestions(ledger: &Ledger) -> Vec<Suggestion> {
        let spent = Self::total_spent(ledger);
        let invested = Self::total_invested(ledger);
        let budget = ledger.budget().amount;
        let mut suggestions = Vec::new();

        if budget > 0.0 && spent / budget > NEAR_LIMIT_RATIO {
            suggestions.push(Suggestion::new(SuggestionKind::NearBudgetLimit));
        }

        let expenses = Self::by_category(ledger, TransactionKind::Expense);
        if let Some(top) = expenses.top() {
            if top.amount > spent * TOP_CATEGORY_SHARE {
                suggestions.push(Suggestion::new(SuggestionKind::TopCategory(top.category)));
            }
        }

        if invested < spent * INVESTMENT_TARGET_RATIO {
            suggestions.push(Suggestion::new(SuggestionKind::IncreaseInvestment));
        }

        if spent > 0.0 && invested == 0.0 {
            suggestions.push(Suggestion::new(SuggestionKind::StartInvesting));
        }

        suggestions
    }

    fn total_of(ledger: &Ledger, kind: TransactionKind) -> f64 {
        ledger.of_kind(kind).map(|txn| txn.amount()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
}

/// Per-category sums, kept in the order each category was first seen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    entries: Vec<CategoryTotal>,
}

impl CategoryBreakdown {
    fn add(&mut self, category: Category, amount: f64) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(CategoryTotal { category, amount }),
        }
    }

    pub fn get(&self, category: impl Into<Category>) -> Option<f64> {
        let category = category.into();
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest category; ties go to the one seen first.
    pub fn top(&self) -> Option<&CategoryTotal> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(current) if current.amount >= entry.amount => Some(current),
            _ => Some(entry),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionLevel {
    Warning,
    Info,
    Success,
}

impl fmt::Display for SuggestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SuggestionLevel::Warning => "warning",
            SuggestionLevel::Info => "info",
            SuggestionLevel::Success => "success",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    NearBudgetLimit,
    TopCategory(Category),
    IncreaseInvestment,
    StartInvesting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub level: SuggestionLevel,
    pub message: String,
}

impl Suggestion {
    fn new(kind: SuggestionKind) -> Self {
        let (level, message) = match kind {
            SuggestionKind::NearBudgetLimit => (
                SuggestionLevel::Warning,
                "You're approaching your budget limit. Consider reducing non-essential expenses."
                    .to_string(),
            ),
            SuggestionKind::TopCategory(category) => (
                SuggestionLevel::Info,
                format!(
                    "{category} is your highest expense category. Consider if this aligns with your financial goals."
                ),
            ),
            SuggestionKind::IncreaseInvestment => (
                SuggestionLevel::Success,
                "Consider increasing your investment allocation. Aim for at least 20% of your spending to go towards investments."
                    .to_string(),
            ),
            SuggestionKind::StartInvesting => (
                SuggestionLevel::Info,
                "Start investing! Even small amounts can grow significantly over time through compound interest."
                    .to_string(),
            ),
        };
        Self {
            kind,
            level,
            message,
        }
    }
}
