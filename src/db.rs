use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, warn};

use crate::error::Result;
use crate::store::KeyValueStore;

/// Key-value table on disk, one row per stored key.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    pub fn open(db_path: impl AsRef<Path>) -> Result<SqliteStore> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        debug!(path = %db_path.display(), "opened store");
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<SqliteStore> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<SqliteStore> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(SqliteStore { connection: conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .connection
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.connection.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;

        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
            .inspect_err(|err| warn!(key, %err, "load failed"))
            .ok()
            .flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Err(err) = self.put(key, value) {
            warn!(key, %err, "save failed");
        }
    }

    fn clear(&mut self, key: &str) {
        if let Err(err) = self.remove(key) {
            warn!(key, %err, "clear failed");
        }
    }
}
