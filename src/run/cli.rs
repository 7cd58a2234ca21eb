use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::engine;
use crate::ledger::Ledger;
use crate::store::Store;
use crate::ui::util::trend_month_labels;

pub(crate) fn as_cli(args: &[String], ledger: &mut Ledger, store: &Store) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(ledger),
        "forecast" | "f" => cli_forecast(ledger),
        "goals" | "g" => cli_goals(ledger),
        "add" => cli_add(&args[2..], ledger, store),
        "goal" => cli_goal(&args[2..], ledger, store),
        "export" => cli_export(&args[2..], ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finsmart {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinSmart — local-only personal finance tracker");
    println!();
    println!("Usage: finsmart [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Current-month spend per category and budget alerts");
    println!("  forecast                      Spending trend with 3-month projection");
    println!("  goals                         List savings goals with progress");
    println!("  add <date> <amount> <desc>    Record a transaction (date: YYYY-MM-DD)");
    println!("  goal <name> <target> [saved]  Create a savings goal");
    println!("  export [path]                 Export all transactions to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_summary(ledger: &Ledger) -> Result<()> {
    let today = chrono::Local::now().date_naive();

    println!("FinSmart — {}", today.format("%Y-%m"));
    println!("{}", "─".repeat(44));

    let spending = ledger.monthly_spending(today);
    if spending.is_empty() {
        println!("  No spending recorded this month");
    } else {
        for (category, spent) in &spending {
            match ledger.budgets().limit(*category) {
                Some(limit) => {
                    println!("  {:<16} ${spent:.2} of ${limit:.2}", category.as_str())
                }
                None => println!("  {:<16} ${spent:.2}", category.as_str()),
            }
        }
    }
    println!("  {:<16} {} all time", "Transactions", ledger.transactions().len());

    let alerts = ledger.alerts();
    if !alerts.is_empty() {
        println!();
        println!("Budget Alerts:");
        for alert in alerts {
            println!(
                "  ⚠ {} over budget by ${:.2} (spent ${:.2} of ${:.2})",
                alert.category,
                alert.exceeded,
                alert.spent(),
                alert.budget,
            );
        }
    }

    Ok(())
}

fn cli_forecast(ledger: &Ledger) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let series = ledger.trend();
    let labels = trend_month_labels(today);

    println!("FinSmart — spending trend (* = projected)");
    println!("{}", "─".repeat(44));
    for (label, value) in labels.iter().zip(
        series
            .actual
            .iter()
            .chain(series.projected.iter()),
    ) {
        println!("  {label:<6} ${value:.2}");
    }

    Ok(())
}

fn cli_goals(ledger: &Ledger) -> Result<()> {
    let goals = ledger.goals();
    if goals.is_empty() {
        println!("No savings goals. Create one with: finsmart goal <name> <target> [saved]");
        return Ok(());
    }

    println!("{:<20} {:>12} {:>12} {:>9}", "Goal", "Saved", "Target", "Progress");
    println!("{}", "─".repeat(56));
    for goal in goals {
        println!(
            "{:<20} {:>12} {:>12} {:>8.1}%",
            goal.name,
            format!("${:.2}", goal.saved_amount),
            format!("${:.2}", goal.target_amount),
            engine::progress(goal),
        );
    }
    Ok(())
}

fn cli_add(args: &[String], ledger: &mut Ledger, store: &Store) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: finsmart add <date> <amount> <description>");
    }

    let date = chrono::NaiveDate::parse_from_str(&args[0], "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date: {} (use YYYY-MM-DD)", args[0]))?;
    let amount = Decimal::from_str(&args[1])
        .ok()
        .filter(|a| *a > Decimal::ZERO)
        .ok_or_else(|| anyhow::anyhow!("Invalid amount: {}", args[1]))?;
    let description = args[2..].join(" ");

    let today = chrono::Local::now().date_naive();
    let txn = ledger.add_transaction(store, &description, amount, date, today)?;
    let category = txn.category;
    println!("Added {description} (${amount:.2}) as {category}");

    if let Some(alert) = ledger.alerts().iter().find(|a| a.category == category) {
        println!(
            "⚠ {} over budget by ${:.2} this month",
            alert.category, alert.exceeded
        );
    }

    Ok(())
}

fn cli_goal(args: &[String], ledger: &mut Ledger, store: &Store) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: finsmart goal <name> <target> [saved]");
    }

    let name = &args[0];
    let target = Decimal::from_str(&args[1])
        .ok()
        .filter(|t| *t > Decimal::ZERO)
        .ok_or_else(|| anyhow::anyhow!("Invalid target amount: {}", args[1]))?;
    let saved = match args.get(2) {
        Some(raw) => Decimal::from_str(raw)
            .ok()
            .filter(|s| *s >= Decimal::ZERO)
            .ok_or_else(|| anyhow::anyhow!("Invalid saved amount: {raw}"))?,
        None => Decimal::ZERO,
    };

    let goal = ledger.add_goal(store, name, target, saved)?;
    println!(
        "Created goal {} (${:.2} of ${:.2}, {:.1}%)",
        goal.name,
        goal.saved_amount,
        goal.target_amount,
        engine::progress(goal),
    );
    Ok(())
}

fn cli_export(args: &[String], ledger: &Ledger) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/finsmart-export.csv")
        });

    let count = ledger.export_csv(&output_path)?;
    if count == 0 {
        println!("No transactions to export");
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
