use std::{env, error::Error, process};

use chrono::Utc;
use colored::Colorize;
use fintrack::{
    config::{Config, ConfigManager},
    core::{
        reports::{self, BudgetLevel},
        LedgerStore, MetricsEngine, SuggestionLevel,
    },
    currency::{format_amount, CurrencyCode},
    init,
    ledger::{parse_amount, parse_date, Category, NewTransaction, TransactionKind},
    storage::JsonFileStore,
};
use uuid::Uuid;

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("{} {err}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        process::exit(1);
    }
    let command = args.remove(0);

    if command == "version" {
        print_version();
        return Ok(());
    }

    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let backend = JsonFileStore::new(manager.store_dir(&config))?;
    let mut store = LedgerStore::open(Box::new(backend));

    match command.as_str() {
        "add" => add(&mut store, &config, args)?,
        "remove" => {
            let raw = required(&args, 0, "transaction id")?;
            let id = Uuid::parse_str(raw).map_err(|_| format!("`{raw}` is not a transaction id"))?;
            match store.remove(id)? {
                Some(txn) => println!(
                    "Removed {} {} ({})",
                    txn.kind(),
                    format_amount(txn.amount(), txn.currency()),
                    txn.category()
                ),
                None => println!("No transaction with id {id}"),
            }
        }
        "list" => list(&store),
        "budget" => budget(&mut store, &config, &args)?,
        "reset-budget" => {
            store.reset_budget()?;
            println!("Budget threshold reset");
        }
        "currency" => match args.first() {
            Some(raw) => {
                let code: CurrencyCode = raw.parse()?;
                store.set_display_currency(code)?;
                println!("Display currency set to {code}");
            }
            None => println!("{}", store.display_currency()),
        },
        "summary" => {
            print_dashboard(&store);
            println!();
            print_suggestions(&store);
        }
        "suggestions" => print_suggestions(&store),
        "categories" => {
            let kind: TransactionKind = required(&args, 0, "transaction type")?.parse()?;
            for name in kind.category_names() {
                println!("{name}");
            }
        }
        "recent" => {
            let kind: TransactionKind = required(&args, 0, "transaction type")?.parse()?;
            let limit = match args.get(1) {
                Some(raw) => raw.parse().map_err(|_| format!("`{raw}` is not a count"))?,
                None => config.recent_limit,
            };
            let items = reports::recent(store.ledger(), kind, limit);
            if items.is_empty() {
                println!("No {kind}s recorded yet.");
            }
            for txn in items {
                println!(
                    "{}  {:<22} {:>16}  {}",
                    txn.date(),
                    txn.category().to_string(),
                    format_amount(txn.amount(), txn.currency()),
                    txn.description()
                );
            }
        }
        "chart" => {
            let kind: TransactionKind = required(&args, 0, "transaction type")?.parse()?;
            let series = reports::chart_series(store.ledger(), kind);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        "export" => {
            let snapshot = reports::export_snapshot(store.ledger());
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        "report" => {
            let today = Utc::now().date_naive();
            println!(
                "{}",
                reports::summary_text(store.ledger(), today, config.report_limit)
            );
        }
        other => {
            print_usage();
            return Err(format!("unknown command `{other}`").into());
        }
    }

    Ok(())
}

fn add(store: &mut LedgerStore, config: &Config, args: Vec<String>) -> CliResult<()> {
    let mut currency = config.default_currency;
    let mut date = None;
    let mut positional = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--currency" {
            let raw = iter.next().ok_or("--currency needs a value")?;
            currency = raw.parse()?;
        } else if arg == "--date" {
            let raw = iter.next().ok_or("--date needs a value")?;
            date = Some(parse_date(&raw)?);
        } else {
            positional.push(arg);
        }
    }

    let kind: TransactionKind = required(&positional, 0, "transaction type")?.parse()?;
    let amount = parse_amount(required(&positional, 1, "amount")?)?;
    let category = Category::parse(kind, required(&positional, 2, "category")?)?;
    let description = positional.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();

    let mut entry = NewTransaction::new(category, amount, currency)?.with_description(description);
    if let Some(date) = date {
        entry = entry.on(date);
    }
    let id = store.add(entry)?;
    println!("{} {id}", "Transaction added".green());
    Ok(())
}

fn budget(store: &mut LedgerStore, config: &Config, args: &[String]) -> CliResult<()> {
    if let Some(raw) = args.first() {
        let amount = parse_amount(raw)?;
        let currency = match args.get(1) {
            Some(code) => code.parse()?,
            None => config.default_currency,
        };
        store.set_budget(amount, currency)?;
        println!("Budget threshold set to {}", format_amount(amount, currency));
    }

    let status = reports::budget_status(store.ledger());
    let budget = store.budget();
    let line = match status.level {
        BudgetLevel::OverBudget => format!(
            "Over budget by {}",
            format_amount(-status.remaining, budget.currency)
        )
        .red(),
        BudgetLevel::Warning => format!(
            "Warning: {} remaining",
            format_amount(status.remaining, budget.currency)
        )
        .yellow(),
        BudgetLevel::OnTrack => format!(
            "{} remaining",
            format_amount(status.remaining, budget.currency)
        )
        .green(),
    };
    println!("{:.1}% of {} used", status.percentage, format_amount(budget.amount, budget.currency));
    println!("{line}");
    Ok(())
}

fn list(store: &LedgerStore) {
    if store.transactions().is_empty() {
        println!("No transactions recorded yet.");
        return;
    }
    for txn in store.transactions() {
        println!(
            "{}  {}  {:<10} {:<22} {:>16}  {}",
            txn.id(),
            txn.date(),
            txn.kind().to_string(),
            txn.category().to_string(),
            format_amount(txn.amount(), txn.currency()),
            txn.description()
        );
    }
}

fn print_dashboard(store: &LedgerStore) {
    let totals = reports::dashboard(store.ledger());
    let money = |value: f64| format_amount(value, totals.currency);
    println!("Total Budget:   {}", money(totals.total_budget));
    println!("Total Spent:    {}", money(totals.total_spent));
    println!("Total Invested: {}", money(totals.total_invested));
    println!("Remaining:      {}", money(totals.remaining));
    println!(
        "Budget used:    {:.1}%",
        MetricsEngine::budget_percentage(store.ledger())
    );
}

fn print_suggestions(store: &LedgerStore) {
    let suggestions = MetricsEngine::suggestions(store.ledger());
    if suggestions.is_empty() {
        println!("{}", "Great job! Your finances look healthy.".green());
        return;
    }
    for suggestion in suggestions {
        let tag = format!("[{}]", suggestion.level);
        let tag = match suggestion.level {
            SuggestionLevel::Warning => tag.yellow(),
            SuggestionLevel::Info => tag.cyan(),
            SuggestionLevel::Success => tag.green(),
        };
        println!("{tag} {}", suggestion.message);
    }
}

fn required<'a>(args: &'a [String], index: usize, what: &str) -> CliResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("missing {what}").into())
}

fn print_version() {
    println!(
        "fintrack {} ({} {}, {} build for {})",
        env!("CARGO_PKG_VERSION"),
        env!("FINTRACK_BUILD_HASH"),
        env!("FINTRACK_BUILD_TIMESTAMP"),
        env!("FINTRACK_BUILD_PROFILE"),
        env!("FINTRACK_BUILD_TARGET"),
    );
}

fn print_usage() {
    eprintln!(
        "Usage: fintrack <command>\n\
         Commands:\n  \
         add <expense|investment> <amount> <category> [description] [--currency CODE] [--date YYYY-MM-DD]\n  \
         remove <id>\n  \
         list\n  \
         budget [<amount> [currency]]\n  \
         reset-budget\n  \
         currency [code]\n  \
         summary\n  \
         suggestions\n  \
         categories <expense|investment>\n  \
         recent <expense|investment> [limit]\n  \
         chart <expense|investment>\n  \
         export\n  \
         report\n  \
         version"
    );
}
