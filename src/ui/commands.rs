use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use std::str::FromStr;

use super::app::{App, Screen};
use crate::ledger::Ledger;
use crate::store::Store;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger, &Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinSmart", cmd_quit, r);
    register_command!("quit", "Quit FinSmart", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("g", "Go to Goals", cmd_goals, r);
    register_command!("goals", "Go to Goals", cmd_goals, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 2024-01-15 Coffee Shop 4.50)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add transaction (e.g. :a 2024-01-15 Coffee Shop 4.50)",
        cmd_add,
        r
    );
    register_command!(
        "goal",
        "Add savings goal (e.g. :goal New Laptop 2000 150)",
        cmd_goal,
        r
    );
    register_command!(
        "search",
        "Search transactions (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s coffee)", cmd_search, r);
    register_command!(
        "export",
        "Export transactions to CSV (e.g. :export ~/finsmart.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    ledger: &mut Ledger,
    store: &Store,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger, store)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger, _store: &Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(
    _args: &str,
    app: &mut App,
    ledger: &mut Ledger,
    _store: &Store,
) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(ledger);
    Ok(())
}

fn cmd_transactions(
    _args: &str,
    app: &mut App,
    ledger: &mut Ledger,
    _store: &Store,
) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh_transactions(ledger);
    Ok(())
}

fn cmd_goals(_args: &str, app: &mut App, ledger: &mut Ledger, _store: &Store) -> anyhow::Result<()> {
    app.screen = Screen::Goals;
    app.refresh_goals(ledger);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger, _store: &Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger, store: &Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add <date> <description> <amount>. Example: :add 2024-01-15 Coffee Shop 4.50");
        return Ok(());
    }

    let parts: Vec<&str> = args.splitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :add <date> <description> <amount>");
        return Ok(());
    }

    let date = match chrono::NaiveDate::parse_from_str(parts[0], "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            app.set_status(format!("Invalid date: {} (use YYYY-MM-DD)", parts[0]));
            return Ok(());
        }
    };

    // The last token is the amount, everything between is the description
    let rest_parts: Vec<&str> = parts[1].rsplitn(2, ' ').collect();
    if rest_parts.len() < 2 {
        app.set_status("Usage: :add <date> <description> <amount>");
        return Ok(());
    }

    let amount_str = rest_parts[0];
    let description = rest_parts[1];

    let amount = match Decimal::from_str(amount_str) {
        Ok(a) if a > Decimal::ZERO => a,
        _ => {
            app.set_status(format!("Invalid amount: {amount_str}"));
            return Ok(());
        }
    };

    let txn = ledger.add_transaction(store, description, amount, date, app.today)?;
    let category = txn.category;
    app.refresh_all(ledger);

    if let Some(alert) = app.alerts.iter().find(|a| a.category == category) {
        app.set_status(format!(
            "Added {description} (${amount}) as {category}. Over budget by ${}",
            alert.exceeded
        ));
    } else {
        app.set_status(format!("Added {description} (${amount}) as {category}"));
    }
    Ok(())
}

fn cmd_goal(args: &str, app: &mut App, ledger: &mut Ledger, store: &Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :goal <name> <target> [saved]. Example: :goal New Laptop 2000 150");
        return Ok(());
    }

    // Trailing tokens that parse as amounts are target and (optionally)
    // saved; everything before them is the goal name.
    let parts: Vec<&str> = args.rsplitn(3, ' ').collect();
    let (name, target, saved) = match parts.as_slice() {
        &[last, mid, rest] => {
            if let (Ok(target), Ok(saved)) = (Decimal::from_str(mid), Decimal::from_str(last)) {
                (rest.to_string(), target, saved)
            } else if let Ok(target) = Decimal::from_str(last) {
                (format!("{rest} {mid}"), target, Decimal::ZERO)
            } else {
                app.set_status("Usage: :goal <name> <target> [saved]");
                return Ok(());
            }
        }
        &[last, rest] => match Decimal::from_str(last) {
            Ok(target) => (rest.to_string(), target, Decimal::ZERO),
            Err(_) => {
                app.set_status("Usage: :goal <name> <target> [saved]");
                return Ok(());
            }
        },
        _ => {
            app.set_status("Usage: :goal <name> <target> [saved]");
            return Ok(());
        }
    };

    if target <= Decimal::ZERO || saved < Decimal::ZERO {
        app.set_status("Target must be positive and saved non-negative");
        return Ok(());
    }

    ledger.add_goal(store, &name, target, saved)?;
    app.refresh_goals(ledger);
    app.screen = Screen::Goals;
    app.set_status(format!("Added goal: {name} (${saved} of ${target})"));
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, ledger: &mut Ledger, _store: &Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Transactions;
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.refresh_transactions(ledger);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_export(args: &str, app: &mut App, ledger: &mut Ledger, _store: &Store) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/finsmart-export.csv")
    } else {
        crate::run::shellexpand(args)
    };

    let count = ledger.export_csv(&path)?;
    if count == 0 {
        app.set_status("No transactions to export");
    } else {
        app.set_status(format!("Exported {count} transactions to {path}"));
    }
    Ok(())
}
