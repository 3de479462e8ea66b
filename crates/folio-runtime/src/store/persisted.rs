use super::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

type Parser<T> = Box<dyn Fn(&str) -> std::result::Result<T, String> + Send + Sync>;

/// Initialization phase of a [`PersistedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Storage has not been read; the value is the caller's initial value.
    Initial,
    /// Storage was read once (successfully or not).
    Hydrated,
}

/// What `hydrate` found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// Key absent; the initial value stands.
    Missing,
    /// Stored value parsed and adopted.
    Loaded,
    /// Stored value could not be read or parsed; the initial value stands.
    Recovered(String),
    /// Already hydrated; nothing happened.
    Skipped,
}

/// Outcome of a write. Never an error: in-memory state is updated regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    Persisted,
    /// Held in memory only, because the value refuses writes before hydration.
    Deferred,
    /// Storage write failed; memory and storage now differ until the next good write.
    Failed(String),
}

impl PersistStatus {
    pub fn is_persisted(&self) -> bool {
        matches!(self, PersistStatus::Persisted)
    }
}

/// A typed value bound to one storage key.
///
/// Reads are deferred: until [`PersistedValue::hydrate`] runs, [`value`](Self::value)
/// returns the initial value and storage is not touched. Every `set`/`update`
/// changes memory first and then writes JSON to storage.
pub struct PersistedValue<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    value: T,
    phase: Phase,
    parser: Parser<T>,
    write_before_hydration: bool,
}

impl<T> PersistedValue<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, initial: T) -> Self {
        Self {
            store,
            key: key.into(),
            value: initial,
            phase: Phase::Initial,
            parser: Box::new(|raw| serde_json::from_str(raw).map_err(|e| e.to_string())),
            write_before_hydration: true,
        }
    }
}

impl<T> PersistedValue<T>
where
    T: Serialize + Clone,
{
    /// Replace the JSON parser used by `hydrate`.
    pub fn with_parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<T, String> + Send + Sync + 'static,
    {
        self.parser = Box::new(parser);
        self
    }

    /// Keep writes in memory until hydration has run, so defaults never
    /// overwrite a stored value that has not been read yet.
    pub fn guard_until_hydrated(mut self) -> Self {
        self.write_before_hydration = false;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Read the stored value once. Never writes, never fails.
    pub fn hydrate(&mut self) -> Hydration {
        if self.phase == Phase::Hydrated {
            return Hydration::Skipped;
        }
        self.phase = Phase::Hydrated;

        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored value; keeping initial");
                return Hydration::Missing;
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read stored value");
                return Hydration::Recovered(err.to_string());
            }
        };

        match (self.parser)(&raw) {
            Ok(value) => {
                tracing::debug!(key = %self.key, "hydrated stored value");
                self.value = value;
                Hydration::Loaded
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding unparseable stored value");
                Hydration::Recovered(err)
            }
        }
    }

    pub fn set(&mut self, value: T) -> PersistStatus {
        self.value = value;
        self.persist()
    }

    /// Fix up the in-memory value without writing. `f` returns whether it
    /// changed anything; the fix reaches storage with the next `set`.
    pub fn repair<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        f(&mut self.value)
    }

    /// Functional update: `next = f(&previous)`.
    pub fn update<F>(&mut self, f: F) -> PersistStatus
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next)
    }

    fn persist(&self) -> PersistStatus {
        if self.phase == Phase::Initial && !self.write_before_hydration {
            tracing::debug!(key = %self.key, "write deferred until hydration");
            return PersistStatus::Deferred;
        }

        let serialized = match serde_json::to_string(&self.value) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to serialize value");
                return PersistStatus::Failed(err.to_string());
            }
        };

        match self.store.set_item(&self.key, &serialized) {
            Ok(()) => {
                tracing::debug!(key = %self.key, bytes = serialized.len(), "persisted value");
                PersistStatus::Persisted
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to persist value");
                PersistStatus::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn memory(items: &[(&str, &str)]) -> Arc<MemoryStore> {
        Arc::new(MemoryStore::seeded(
            items.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        ))
    }

    #[test]
    fn test_initial_phase_ignores_storage() {
        let store = memory(&[("portfolioStyle", "\"creative\"")]);
        let value = PersistedValue::new(store.clone(), "portfolioStyle", None::<String>);

        assert_eq!(value.phase(), Phase::Initial);
        assert_eq!(value.value(), &None);
    }

    #[test]
    fn test_hydrate_loads_stored_value_once() {
        let store = memory(&[("portfolioStyle", "\"creative\"")]);
        let mut value = PersistedValue::new(store.clone(), "portfolioStyle", None::<String>);

        assert_eq!(value.hydrate(), Hydration::Loaded);
        assert_eq!(value.value().as_deref(), Some("creative"));
        assert_eq!(value.hydrate(), Hydration::Skipped);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_corrupt_value_keeps_initial() {
        let store = memory(&[("portfolioPages", "{not json")]);
        let mut value = PersistedValue::new(store.clone(), "portfolioPages", vec![1u32, 2, 3]);

        assert!(matches!(value.hydrate(), Hydration::Recovered(_)));
        assert_eq!(value.value(), &vec![1, 2, 3]);
        assert_eq!(store.get_item("portfolioPages").unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_missing_key_keeps_initial() {
        let store = memory(&[]);
        let mut value = PersistedValue::new(store, "primaryColor", Some("#000".to_string()));
        assert_eq!(value.hydrate(), Hydration::Missing);
        assert_eq!(value.value().as_deref(), Some("#000"));
    }

    #[test]
    fn test_set_and_update_write_through() {
        let store = memory(&[]);
        let mut value = PersistedValue::new(store.clone(), "count", 1u32);
        value.hydrate();

        assert_eq!(value.set(5), PersistStatus::Persisted);
        assert_eq!(value.update(|prev| prev + 1), PersistStatus::Persisted);
        assert_eq!(*value.value(), 6);
        assert_eq!(store.get_item("count").unwrap().as_deref(), Some("6"));
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let store = memory(&[]);
        let mut value = PersistedValue::new(store.clone(), "secondaryColor", String::new());
        value.hydrate();
        store.fail_writes(true);

        let status = value.set("#445566".to_string());
        assert!(matches!(status, PersistStatus::Failed(_)));
        assert_eq!(value.value(), "#445566");
        assert_eq!(store.get_item("secondaryColor").unwrap(), None);

        store.fail_writes(false);
        assert!(value.update(|prev| prev.clone()).is_persisted());
        assert_eq!(
            store.get_item("secondaryColor").unwrap().as_deref(),
            Some("\"#445566\"")
        );
    }

    #[test]
    fn test_guarded_value_defers_writes_before_hydration() {
        let store = memory(&[("name", "\"stored\"")]);
        let mut value =
            PersistedValue::new(store.clone(), "name", "default".to_string()).guard_until_hydrated();

        assert_eq!(value.set("early".to_string()), PersistStatus::Deferred);
        assert_eq!(store.write_count(), 0);

        value.hydrate();
        assert_eq!(value.value(), "stored");
    }

    #[test]
    fn test_unguarded_value_writes_before_hydration() {
        let store = memory(&[]);
        let mut value = PersistedValue::new(store.clone(), "name", String::new());
        assert_eq!(value.set("early".to_string()), PersistStatus::Persisted);
        assert_eq!(store.write_count(), 1);
    }
}
