mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::models::{Goal, Transaction};

/// Logical name the transaction collection is stored under.
pub(crate) const TRANSACTIONS_KEY: &str = "finsmart_transactions";
/// Logical name the goal collection is stored under.
pub(crate) const GOALS_KEY: &str = "finsmart_goals";

/// Durable key-value store holding whole JSON-serialized collections.
/// Last write wins; no history is kept.
pub(crate) struct Store {
    conn: Connection,
}

impl Store {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open store: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set store pragmas")?;
        let mut store = Self { conn };
        store.migrate().context("Store migration failed")?;
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh store - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Raw key-value access ──────────────────────────────────

    pub(crate) fn load(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn save(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    // ── Typed collections ─────────────────────────────────────

    /// Stored transactions, or None when the key is missing or the
    /// payload does not parse. Malformed data reads as "no data" so the
    /// caller can fall back to defaults; this never masks save errors.
    pub(crate) fn load_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        Ok(self
            .load(TRANSACTIONS_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok()))
    }

    pub(crate) fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string(transactions)
            .context("Failed to serialize transactions")?;
        self.save(TRANSACTIONS_KEY, &raw)
    }

    pub(crate) fn load_goals(&self) -> Result<Option<Vec<Goal>>> {
        Ok(self
            .load(GOALS_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok()))
    }

    pub(crate) fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        let raw = serde_json::to_string(goals).context("Failed to serialize goals")?;
        self.save(GOALS_KEY, &raw)
    }
}
