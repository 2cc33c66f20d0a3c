use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{LostFoundError, Result};
use crate::report::Report;

pub const STORE_DIR: &str = ".lostfound";
const STORE_DB: &str = "store.db";

/// Fixed key the whole report collection lives under. A schema change to the
/// report wire shape must bump the suffix; there is no migration logic.
pub const STORE_KEY: &str = "lostfound_reports_v1";

/// Local key-value store holding the serialized report collection.
///
/// One fixed key maps to one JSON array. Every save replaces the whole value
/// (last-writer-wins, no merge), so a second process writing the same store
/// silently overwrites the first.
pub struct LocalStore {
    conn: Connection,
    path: PathBuf,
}

impl LocalStore {
    /// Open the store under `<root>/.lostfound/`, creating the directory and
    /// schema on demand. There is no separate init step.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(STORE_DIR);
        fs::create_dir_all(&dir)?;

        let path = dir.join(STORE_DB);
        let conn = Connection::open(&path)?;

        let store = Self { conn, path };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Read the raw serialized value under a key.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write the raw serialized value under a key, replacing prior content.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load the report collection; a corrupt payload is an explicit error.
    pub fn load_strict(&self) -> Result<Vec<Report>> {
        match self.get_raw(STORE_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| LostFoundError::StorageCorrupt(e.to_string())),
        }
    }

    /// Fail-safe load: corrupt content degrades to an empty collection with a
    /// warning instead of failing the command. Database errors still
    /// propagate.
    pub fn load(&self) -> Result<Vec<Report>> {
        match self.load_strict() {
            Err(LostFoundError::StorageCorrupt(reason)) => {
                tracing::warn!(%reason, "report store is corrupt, treating as empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Serialize the full collection and replace whatever was stored before.
    pub fn save(&self, reports: &[Report]) -> Result<()> {
        let raw = serde_json::to_string(reports)?;
        self.put_raw(STORE_KEY, &raw)?;
        tracing::debug!(count = reports.len(), "saved report collection");
        Ok(())
    }

    /// Delete the collection key entirely. Demo reset only.
    pub fn clear(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", [STORE_KEY])?;
        Ok(())
    }

    /// Size of the backing database file in bytes.
    pub fn size_on_disk(&self) -> Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }
}
