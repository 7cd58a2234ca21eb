use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::engine::TrendSeries;
use crate::ledger::Ledger;
use crate::models::{BudgetAlert, Category, Goal, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Goals,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions, Self::Goals]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Goals => write!(f, "Goals"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
        }
    }
}

/// Display state for the TUI. The ledger stays the single owner of the
/// collections; the app keeps render copies that are refreshed after
/// every mutation and whenever the search input changes.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    // Dashboard
    pub(crate) alerts: Vec<BudgetAlert>,
    pub(crate) spending_by_category: Vec<(Category, Decimal)>,
    pub(crate) trend: TrendSeries,

    // Transactions (search-filtered view)
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_count: usize,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Goals
    pub(crate) goals: Vec<Goal>,
    pub(crate) goal_index: usize,
    pub(crate) goal_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(today: NaiveDate, ledger: &Ledger) -> Self {
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,

            alerts: Vec::new(),
            spending_by_category: Vec::new(),
            trend: ledger.trend(),

            transactions: Vec::new(),
            transaction_count: 0,
            transaction_index: 0,
            transaction_scroll: 0,

            goals: Vec::new(),
            goal_index: 0,
            goal_scroll: 0,

            visible_rows: 20,
        };
        app.refresh_all(ledger);
        app
    }

    pub(crate) fn refresh_dashboard(&mut self, ledger: &Ledger) {
        self.alerts = ledger.alerts().to_vec();
        self.spending_by_category = ledger.spending_by_category();
        self.trend = ledger.trend();
    }

    /// Re-copy the transaction list, applying the live search filter.
    pub(crate) fn refresh_transactions(&mut self, ledger: &Ledger) {
        let needle = self.search_input.to_lowercase();
        self.transactions = ledger
            .transactions()
            .iter()
            .filter(|t| needle.is_empty() || t.description.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.transaction_count = ledger.transactions().len();
        if self.transaction_index >= self.transactions.len() && !self.transactions.is_empty() {
            self.transaction_index = self.transactions.len() - 1;
        }
    }

    pub(crate) fn refresh_goals(&mut self, ledger: &Ledger) {
        self.goals = ledger.goals().to_vec();
        if self.goal_index >= self.goals.len() && !self.goals.is_empty() {
            self.goal_index = self.goals.len() - 1;
        }
    }

    pub(crate) fn refresh_all(&mut self, ledger: &Ledger) {
        self.refresh_dashboard(ledger);
        self.refresh_transactions(ledger);
        self.refresh_goals(ledger);
    }

    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn goal_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
