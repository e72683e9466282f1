use anyhow::{Result, anyhow};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Backing key-value store consumed by the proxy.
///
/// The proxy treats the store as an external collaborator: it only needs
/// point reads, point writes, point deletes, and a prefix scan. Absence of a
/// key must be distinguishable from an empty-string value, which is why
/// `get` returns `Option<String>`.
///
/// Iteration order of `scan_prefix` is defined by the implementation; the
/// proxy forwards keys in whatever order the store yields them.
pub trait Store: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any existing value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Returns `true` if the key existed.
    fn delete(&self, key: &str) -> Result<bool>;

    /// List every key starting with `prefix`, in store iteration order.
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>>;
}

/// In-memory `Store` backed by a `BTreeMap` behind an `RwLock`.
///
/// Each operation takes the lock once, so individual reads and writes are
/// atomic; there is no cross-key atomicity. Scans yield keys in sorted
/// order, which is this store's iteration order.
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.read().map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.write().map_err(|_| anyhow!("store lock poisoned"))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let mut data = self.data.write().map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(data.remove(key).is_some())
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let data = self.data.read().map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(data
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}
