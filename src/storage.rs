//! Analysis history persistence.
//!
//! The detector never touches a store; the scan layer appends a record after
//! each successful analysis when one is attached.

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::detect::SuspicionLevel;

/// One persisted analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Seconds since the Unix epoch.
    pub analyzed_at: u64,
    pub filename: String,
    pub image_sha256: String,
    pub chi_square_score: f64,
    pub entropy: f64,
    pub suspicion_level: SuspicionLevel,
}

pub trait HistoryStore: Send {
    fn append(&mut self, record: &HistoryRecord) -> Result<()>;

    /// All records, oldest first.
    fn list(&mut self) -> Result<Vec<HistoryRecord>>;

    /// Removes every record and returns how many were removed.
    fn clear(&mut self) -> Result<usize>;
}

/// Newest `limit` records, oldest first.
pub fn recent(store: &mut dyn HistoryStore, limit: usize) -> Result<Vec<HistoryRecord>> {
    let mut records = store.list()?;
    let skip = records.len().saturating_sub(limit);
    records.drain(..skip);
    Ok(records)
}

pub struct SqliteHistoryStore {
    conn: Connection,
}

impl SqliteHistoryStore {
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("open history database {}", db_path))?;
        let mut store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;

            CREATE TABLE IF NOT EXISTS analyses (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              analyzed_at INTEGER NOT NULL,
              filename TEXT NOT NULL,
              image_sha256 TEXT NOT NULL,
              chi_square_score REAL NOT NULL,
              entropy REAL NOT NULL,
              suspicion_level TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_analyses_analyzed ON analyses(analyzed_at);
            "#,
        )?;
        Ok(())
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn append(&mut self, record: &HistoryRecord) -> Result<()> {
        let analyzed_at = i64::try_from(record.analyzed_at)
            .map_err(|_| anyhow!("analysis timestamp exceeds i64 range"))?;
        self.conn.execute(
            r#"
            INSERT INTO analyses(analyzed_at, filename, image_sha256, chi_square_score, entropy, suspicion_level)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                analyzed_at,
                record.filename,
                record.image_sha256,
                record.chi_square_score,
                record.entropy,
                record.suspicion_level.as_str()
            ],
        )?;
        Ok(())
    }

    fn list(&mut self) -> Result<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT analyzed_at, filename, image_sha256, chi_square_score, entropy, suspicion_level
            FROM analyses ORDER BY id ASC
            "#,
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let analyzed_at: i64 = row.get(0)?;
            let level: String = row.get(5)?;
            out.push(HistoryRecord {
                analyzed_at: u64::try_from(analyzed_at)
                    .map_err(|_| anyhow!("corrupt history: negative timestamp"))?,
                filename: row.get(1)?,
                image_sha256: row.get(2)?,
                chi_square_score: row.get(3)?,
                entropy: row.get(4)?,
                suspicion_level: level
                    .parse::<SuspicionLevel>()
                    .map_err(|e| anyhow!("corrupt history: {}", e))?,
            });
        }
        Ok(out)
    }

    fn clear(&mut self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM analyses", [])?;
        Ok(removed)
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryHistoryStore {
    records: Vec<HistoryRecord>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(&mut self, record: &HistoryRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn list(&mut self) -> Result<Vec<HistoryRecord>> {
        Ok(self.records.clone())
    }

    fn clear(&mut self) -> Result<usize> {
        let removed = self.records.len();
        self.records.clear();
        Ok(removed)
    }
}
