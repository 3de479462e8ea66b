use super::{KeyValueStore, Listener, StoreError, StoreEventKind, StoreResult, Subscribers};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory store for tests. Can be seeded, capped, or told to fail writes.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, String>>,
    quota_bytes: Option<u64>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
    subscribers: Subscribers,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate raw values without counting them as writes.
    pub fn seeded<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        if let Ok(mut map) = store.items.lock() {
            for (key, value) in items {
                map.insert(key.into(), value.into());
            }
        }
        store
    }

    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `set_item` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }

        {
            let mut items = self.lock()?;
            if let Some(quota) = self.quota_bytes {
                let others: usize = items
                    .iter()
                    .filter(|(k, _)| k.as_str() != key)
                    .map(|(_, v)| v.len())
                    .sum();
                let needed = (others + value.len()) as u64;
                if needed > quota {
                    return Err(StoreError::QuotaExceeded { needed, quota });
                }
            }
            items.insert(key.to_string(), value.to_string());
        }

        self.writes.fetch_add(1, Ordering::SeqCst);
        self.subscribers.notify(key, StoreEventKind::Set);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        let removed = self.lock()?.remove(key).is_some();
        if removed {
            self.subscribers.notify(key, StoreEventKind::Removed);
        }
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }

    fn subscribe(&self, listener: Listener) {
        self.subscribers.add(listener);
    }
}
