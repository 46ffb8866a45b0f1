//! Presentation-ready views derived from a ledger snapshot: budget progress,
//! recent activity, chart series, export rows and a plain-text summary.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use super::metrics::MetricsEngine;
use crate::{
    currency::{format_amount, CurrencyCode},
    ledger::{Ledger, Transaction, TransactionKind},
};

pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const DEFAULT_REPORT_LIMIT: usize = 10;

const WARNING_PERCENTAGE: f64 = 80.0;
const OVER_BUDGET_PERCENTAGE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    OnTrack,
    Warning,
    OverBudget,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub percentage: f64,
    pub remaining: f64,
    pub level: BudgetLevel,
}

impl BudgetStatus {
    /// Percentage clamped to the 0-100 range a progress bar can show.
    pub fn progress(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}

pub fn budget_status(ledger: &Ledger) -> BudgetStatus {
    let percentage = MetricsEngine::budget_percentage(ledger);
    let level = if percentage >= OVER_BUDGET_PERCENTAGE {
        BudgetLevel::OverBudget
    } else if percentage >= WARNING_PERCENTAGE {
        BudgetLevel::Warning
    } else {
        BudgetLevel::OnTrack
    };
    BudgetStatus {
        percentage,
        remaining: MetricsEngine::remaining(ledger),
        level,
    }
}

/// Latest transactions of `kind` by date, newest first. Entries sharing a
/// date keep their insertion order.
pub fn recent(ledger: &Ledger, kind: TransactionKind, limit: usize) -> Vec<&Transaction> {
    let mut items: Vec<&Transaction> = ledger.of_kind(kind).collect();
    items.sort_by(|a, b| b.date().cmp(&a.date()));
    items.truncate(limit);
    items
}

/// Parallel label/value vectors for a charting collaborator.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

pub fn chart_series(ledger: &Ledger, kind: TransactionKind) -> ChartSeries {
    let breakdown = MetricsEngine::by_category(ledger, kind);
    let mut series = ChartSeries::default();
    for entry in breakdown.iter() {
        series.labels.push(entry.category.to_string());
        series.values.push(entry.amount);
    }
    series
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_budget: f64,
    pub total_spent: f64,
    pub total_invested: f64,
    pub remaining: f64,
    pub currency: CurrencyCode,
}

pub fn dashboard(ledger: &Ledger) -> Dashboard {
    Dashboard {
        total_budget: ledger.budget().amount,
        total_spent: MetricsEngine::total_spent(ledger),
        total_invested: MetricsEngine::total_invested(ledger),
        remaining: MetricsEngine::remaining(ledger),
        currency: ledger.display_currency(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRow {
    pub date: NaiveDate,
    #[serde(rename = "Type")]
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub currency: CurrencyCode,
}

impl From<&Transaction> for ExportRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date(),
            kind: txn.kind(),
            category: txn.category().to_string(),
            description: txn.description().to_string(),
            amount: txn.amount(),
            currency: txn.currency(),
        }
    }
}

/// Read-only snapshot handed to export tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSnapshot {
    pub totals: Dashboard,
    pub rows: Vec<ExportRow>,
}

pub fn export_snapshot(ledger: &Ledger) -> ExportSnapshot {
    ExportSnapshot {
        totals: dashboard(ledger),
        rows: ledger.transactions().iter().map(ExportRow::from).collect(),
    }
}

/// Plain-text summary with totals and the last `limit` transactions.
pub fn summary_text(ledger: &Ledger, today: NaiveDate, limit: usize) -> String {
    let totals = dashboard(ledger);
    let money = |value: f64| format_amount(value, totals.currency);
    let mut out = String::new();
    let _ = writeln!(out, "Financial Summary ({})", today.format("%Y-%m-%d"));
    out.push('\n');
    let _ = writeln!(out, "Total Budget: {}", money(totals.total_budget));
    let _ = writeln!(out, "Total Spent: {}", money(totals.total_spent));
    let _ = writeln!(out, "Total Invested: {}", money(totals.total_invested));
    let _ = writeln!(out, "Remaining: {}", money(totals.remaining));
    out.push('\n');
    out.push_str("Recent Transactions:");

    let transactions = ledger.transactions();
    let start = transactions.len().saturating_sub(limit);
    for txn in &transactions[start..] {
        let _ = write!(
            out,
            "\n{} - {}: {} ({}) - {}",
            txn.date().format("%Y-%m-%d"),
            txn.kind().as_str().to_uppercase(),
            txn.description(),
            txn.category(),
            format_amount(txn.amount(), txn.currency())
        );
    }
    out
}
