use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::db::SqliteStore;
use crate::error::BlocoError;

/// Durable string-keyed storage. Absence of a key is the normal "no prior
/// value" case; implementations never report failures to the caller.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
    fn clear(&mut self, key: &str);

    /// Whether writes outlive the process.
    fn is_durable(&self) -> bool {
        true
    }
}

/// Session-only store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn is_durable(&self) -> bool {
        false
    }
}

/// SQLite storage that falls back to memory for the rest of the session once
/// the database fails. Writes are mirrored in memory so a fallback keeps
/// whatever the session already wrote.
pub struct FallbackStore {
    durable: Option<SqliteStore>,
    mirror: MemoryStore,
}

impl FallbackStore {
    pub fn open(db_path: impl AsRef<Path>) -> Self {
        let db_path = db_path.as_ref();
        match SqliteStore::open(db_path) {
            Ok(store) => Self::new(store),
            Err(err) => {
                warn!(path = %db_path.display(), %err, "storage unavailable, notes will not outlive this session");
                Self::in_memory()
            }
        }
    }

    pub fn new(durable: SqliteStore) -> Self {
        FallbackStore {
            durable: Some(durable),
            mirror: MemoryStore::new(),
        }
    }

    pub fn in_memory() -> Self {
        FallbackStore {
            durable: None,
            mirror: MemoryStore::new(),
        }
    }

    fn degrade(&mut self, err: &BlocoError) {
        warn!(%err, "storage failed, continuing in memory");
        self.durable = None;
    }
}

impl KeyValueStore for FallbackStore {
    fn load(&self, key: &str) -> Option<String> {
        match &self.durable {
            Some(db) => match db.get(key) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key, %err, "load failed, using session value");
                    self.mirror.load(key)
                }
            },
            None => self.mirror.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        self.mirror.save(key, value);
        if let Some(Err(err)) = self.durable.as_ref().map(|db| db.put(key, value)) {
            self.degrade(&err);
        }
    }

    fn clear(&mut self, key: &str) {
        self.mirror.clear(key);
        if let Some(Err(err)) = self.durable.as_ref().map(|db| db.remove(key)) {
            self.degrade(&err);
        }
    }

    fn is_durable(&self) -> bool {
        self.durable.is_some()
    }
}
