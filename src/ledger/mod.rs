mod sample;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::engine::{self, BudgetTable, Categorizer, TrendSeries};
use crate::models::{BudgetAlert, Category, Goal, Transaction};
use crate::store::Store;

/// Owns the canonical transaction and goal collections and drives the
/// engine. All mutation goes through here, serialized by the caller:
/// adding a transaction persists the collection and recomputes alerts
/// before control returns.
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
    alerts: Vec<BudgetAlert>,
    categorizer: Categorizer,
    budgets: BudgetTable,
}

impl Ledger {
    /// Load both collections, substituting the sample data when the
    /// store reports no usable payload. The substitution happens only
    /// here; samples are not written back until the first mutation.
    pub(crate) fn load(store: &Store, today: NaiveDate) -> Result<Self> {
        let transactions = store
            .load_transactions()?
            .unwrap_or_else(sample::transactions);
        let goals = store.load_goals()?.unwrap_or_else(sample::goals);

        let mut ledger = Self {
            transactions,
            goals,
            alerts: Vec::new(),
            categorizer: Categorizer::standard(),
            budgets: BudgetTable::standard(),
        };
        ledger.refresh_alerts(today);
        Ok(ledger)
    }

    // ── Mutation ──────────────────────────────────────────────

    /// Categorize and record a new transaction, newest first. The whole
    /// collection is persisted and alerts are recomputed before this
    /// returns; a save failure surfaces to the caller.
    pub(crate) fn add_transaction(
        &mut self,
        store: &Store,
        description: &str,
        amount: Decimal,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<&Transaction> {
        let category = self.categorizer.categorize(description);
        let txn = Transaction::new(description.to_string(), amount, date, category);
        self.transactions.insert(0, txn);
        store
            .save_transactions(&self.transactions)
            .context("Failed to save transactions")?;
        self.refresh_alerts(today);
        Ok(&self.transactions[0])
    }

    pub(crate) fn add_goal(
        &mut self,
        store: &Store,
        name: &str,
        target_amount: Decimal,
        saved_amount: Decimal,
    ) -> Result<&Goal> {
        let goal = Goal::new(name.to_string(), target_amount, saved_amount);
        self.goals.push(goal);
        store.save_goals(&self.goals).context("Failed to save goals")?;
        Ok(&self.goals[self.goals.len() - 1])
    }

    pub(crate) fn refresh_alerts(&mut self, reference: NaiveDate) {
        self.alerts = engine::compute_alerts(&self.transactions, &self.budgets, reference);
    }

    // ── Read access ───────────────────────────────────────────

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub(crate) fn alerts(&self) -> &[BudgetAlert] {
        &self.alerts
    }

    pub(crate) fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    /// Spend summed per category over every transaction on record, in
    /// category declaration order, zero categories omitted. This is the
    /// category chart series and is deliberately not month-filtered.
    pub(crate) fn spending_by_category(&self) -> Vec<(Category, Decimal)> {
        Category::all()
            .iter()
            .filter_map(|&category| {
                let total: Decimal = self
                    .transactions
                    .iter()
                    .filter(|t| t.category == category)
                    .map(|t| t.amount)
                    .sum();
                (total > Decimal::ZERO).then_some((category, total))
            })
            .collect()
    }

    /// Month-filtered spend per category, for the summary views.
    pub(crate) fn monthly_spending(&self, reference: NaiveDate) -> Vec<(Category, Decimal)> {
        Category::all()
            .iter()
            .filter_map(|&category| {
                let total: Decimal = self
                    .transactions
                    .iter()
                    .filter(|t| t.category == category && t.in_month(reference))
                    .map(|t| t.amount)
                    .sum();
                (total > Decimal::ZERO).then_some((category, total))
            })
            .collect()
    }

    /// Chart series: five configured history months plus the running
    /// total of every recorded transaction, and the three projections.
    pub(crate) fn trend(&self) -> TrendSeries {
        engine::trend_series(
            &engine::config::SPENDING_HISTORY,
            engine::running_total(&self.transactions),
        )
    }

    // ── Export ────────────────────────────────────────────────

    /// Write all transactions to a CSV file, newest first. Returns the
    /// row count.
    pub(crate) fn export_csv(&self, path: &str) -> Result<usize> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create export file: {path}"))?;
        writer.write_record(["id", "date", "description", "category", "amount"])?;
        for txn in &self.transactions {
            writer.write_record([
                txn.id.as_str(),
                &txn.date.to_string(),
                txn.description.as_str(),
                txn.category.as_str(),
                &txn.amount.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(self.transactions.len())
    }
}

#[cfg(test)]
mod tests;
