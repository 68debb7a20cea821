//! SQLite-backed key-value store.

use std::path::Path;

use tracing::debug;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Schema version for migrations
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS kv_state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Key-value store in a single SQLite table.
pub struct SqliteStore {
    conn: rusqlite::Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = rusqlite::Connection::open(path.as_ref())?;
        let store = Self { conn };
        store.initialize()?;
        debug!("Opened SQLite store at {:?}", path.as_ref());
        Ok(store)
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = rusqlite::Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(CREATE_TABLES)?;
        if self.schema_version()?.is_none() {
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                [SCHEMA_VERSION],
            )?;
        }
        Ok(())
    }

    /// Get the recorded schema version, if any
    pub fn schema_version(&self) -> Result<Option<u32>, StoreError> {
        let result = self.conn.query_row(
            "SELECT MAX(version) FROM schema_version",
            [],
            |row| row.get::<_, Option<u32>>(0),
        )?;
        Ok(result)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let result = self.conn.query_row(
            "SELECT value FROM kv_state WHERE key = ?1",
            [key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_state (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
            [key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get("lp_cart_v1").unwrap(), None);

        store.set("lp_cart_v1", "[]").unwrap();
        store.set("lp_cart_v1", r#"[{"id":"a","qty":2}]"#).unwrap();
        assert_eq!(
            store.get("lp_cart_v1").unwrap().as_deref(),
            Some(r#"[{"id":"a","qty":2}]"#)
        );
    }

    #[test]
    fn schema_version_recorded_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.db");

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.schema_version().unwrap(), Some(SCHEMA_VERSION));
        drop(store);

        let store = SqliteStore::open(&path).unwrap();
        let rows: u32 = store
            .conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }
}
