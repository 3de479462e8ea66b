//! Persisted configuration store.
//!
//! [`KeyValueStore`] is the seam between folio and whatever keeps raw
//! strings across runs. [`FileStore`] writes one file per key under the data
//! directory; [`MemoryStore`] backs tests. [`PersistedValue`] layers typed,
//! two-phase access on top of either.

mod file;
mod memory;
mod persisted;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::{Hydration, PersistStatus, PersistedValue, Phase};

use std::fmt;
use std::sync::Mutex;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),

    /// Writing would push the store past its byte quota
    QuotaExceeded { needed: u64, quota: u64 },

    /// Key cannot be mapped onto the backing medium
    InvalidKey(String),

    /// Backing medium refused the operation
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "IO error: {}", err),
            StoreError::QuotaExceeded { needed, quota } => write!(
                f,
                "Storage quota exceeded ({} bytes needed, quota is {} bytes)",
                needed, quota
            ),
            StoreError::InvalidKey(key) => write!(f, "Invalid storage key: {}", key),
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEventKind {
    Set,
    Removed,
}

/// Delivered to subscribers after a successful write or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: String,
    pub kind: StoreEventKind,
}

pub type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Raw string storage keyed by name, in the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Register a callback invoked synchronously after every successful mutation.
    fn subscribe(&self, listener: Listener);
}

/// Listener registry shared by the store implementations.
#[derive(Default)]
pub(crate) struct Subscribers {
    listeners: Mutex<Vec<Listener>>,
}

impl Subscribers {
    pub(crate) fn add(&self, listener: Listener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }

    pub(crate) fn notify(&self, key: &str, kind: StoreEventKind) {
        let event = StoreEvent {
            key: key.to_string(),
            kind,
        };
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(&event);
            }
        }
    }
}
