mod common;

use common::{expense, investment, setup_test_store};
use fintrack::{
    core::{reports, SuggestionKind},
    currency::CurrencyCode,
    ledger::{ExpenseCategory, InvestmentCategory, TransactionKind},
    MetricsEngine,
};

fn kinds(store: &fintrack::LedgerStore) -> Vec<SuggestionKind> {
    MetricsEngine::suggestions(store.ledger())
        .into_iter()
        .map(|s| s.kind)
        .collect()
}

#[test]
fn near_limit_and_top_category_fire_together() {
    let (mut store, _dir) = setup_test_store();
    store.set_budget(1000.0, CurrencyCode::Usd).unwrap();
    store
        .add(expense(ExpenseCategory::FoodAndDining, 950.0))
        .unwrap();

    assert_eq!(MetricsEngine::budget_percentage(store.ledger()), 95.0);
    let kinds = kinds(&store);
    assert!(kinds.contains(&SuggestionKind::NearBudgetLimit));
    assert!(kinds.contains(&SuggestionKind::TopCategory(
        ExpenseCategory::FoodAndDining.into()
    )));
}

#[test]
fn small_investment_prompts_allocation_but_not_start() {
    let (mut store, _dir) = setup_test_store();
    store
        .add(expense(ExpenseCategory::FoodAndDining, 100.0))
        .unwrap();
    store.add(investment(InvestmentCategory::Stocks, 10.0)).unwrap();

    let kinds = kinds(&store);
    assert!(kinds.contains(&SuggestionKind::IncreaseInvestment));
    assert!(!kinds.contains(&SuggestionKind::StartInvesting));
}

#[test]
fn zero_budget_never_warns_about_the_limit() {
    let (mut store, _dir) = setup_test_store();
    for amount in [10.0, 5_000.0, 1_000_000.0] {
        store.add(expense(ExpenseCategory::Housing, amount)).unwrap();
        assert_eq!(MetricsEngine::budget_percentage(store.ledger()), 0.0);
        assert!(!kinds(&store).contains(&SuggestionKind::NearBudgetLimit));
    }
}

#[test]
fn total_spent_ignores_insertion_order() {
    let amounts = [12.5, 300.0, 0.0, 47.25, 1_000.0];
    let (mut forward, _a) = setup_test_store();
    let (mut backward, _b) = setup_test_store();
    for amount in amounts {
        forward.add(expense(ExpenseCategory::Shopping, amount)).unwrap();
    }
    for amount in amounts.iter().rev() {
        backward
            .add(expense(ExpenseCategory::Shopping, *amount))
            .unwrap();
    }
    backward
        .add(investment(InvestmentCategory::Bonds, 99.0))
        .unwrap();

    let expected: f64 = amounts.iter().sum();
    assert_eq!(MetricsEngine::total_spent(forward.ledger()), expected);
    assert_eq!(MetricsEngine::total_spent(backward.ledger()), expected);
    assert_eq!(MetricsEngine::total_invested(backward.ledger()), 99.0);
}

#[test]
fn removed_amount_leaves_category_breakdown() {
    let (mut store, _dir) = setup_test_store();
    store
        .add(expense(ExpenseCategory::Entertainment, 40.0))
        .unwrap();
    let gone = store
        .add(expense(ExpenseCategory::Entertainment, 60.0))
        .unwrap();
    let last = store
        .add(expense(ExpenseCategory::Healthcare, 25.0))
        .unwrap();

    store.remove(gone).unwrap();
    let breakdown = MetricsEngine::by_category(store.ledger(), TransactionKind::Expense);
    assert_eq!(breakdown.get(ExpenseCategory::Entertainment), Some(40.0));

    store.remove(last).unwrap();
    let breakdown = MetricsEngine::by_category(store.ledger(), TransactionKind::Expense);
    assert_eq!(breakdown.get(ExpenseCategory::Healthcare), None);
}

#[test]
fn remaining_identity_holds_through_mutations() {
    let (mut store, _dir) = setup_test_store();
    let check = |store: &fintrack::LedgerStore| {
        let ledger = store.ledger();
        assert_eq!(
            MetricsEngine::remaining(ledger),
            ledger.budget().amount - MetricsEngine::total_spent(ledger)
        );
    };
    check(&store);
    store.set_budget(300.0, CurrencyCode::Usd).unwrap();
    check(&store);
    let id = store
        .add(expense(ExpenseCategory::Transportation, 420.0))
        .unwrap();
    check(&store);
    assert!(MetricsEngine::remaining(store.ledger()) < 0.0);
    store.remove(id).unwrap();
    check(&store);
    store.reset_budget().unwrap();
    check(&store);
}

#[test]
fn dashboard_reflects_store_state() {
    let (mut store, _dir) = setup_test_store();
    store.set_budget(2000.0, CurrencyCode::Usd).unwrap();
    store.set_display_currency(CurrencyCode::Eur).unwrap();
    store.add(expense(ExpenseCategory::Housing, 1700.0)).unwrap();
    store
        .add(investment(InvestmentCategory::PreciousMetals, 150.0))
        .unwrap();

    let totals = reports::dashboard(store.ledger());
    assert_eq!(totals.total_budget, 2000.0);
    assert_eq!(totals.total_spent, 1700.0);
    assert_eq!(totals.total_invested, 150.0);
    assert_eq!(totals.remaining, 300.0);
    assert_eq!(totals.currency, CurrencyCode::Eur);
    assert_eq!(
        reports::budget_status(store.ledger()).level,
        reports::BudgetLevel::Warning
    );
}
