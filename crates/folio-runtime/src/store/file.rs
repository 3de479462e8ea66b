use super::{KeyValueStore, Listener, StoreError, StoreEventKind, StoreResult, Subscribers};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One file per key under `dir`. Values are written via a temp file and a rename
/// so a crash never leaves half a value behind.
pub struct FileStore {
    dir: PathBuf,
    quota_bytes: u64,
    subscribers: Subscribers,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, quota_bytes: u64) -> Self {
        Self {
            dir: dir.into(),
            quota_bytes,
            subscribers: Subscribers::default(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }

    /// Bytes held by every key except `skip`.
    fn usage_excluding(&self, skip: &Path) -> StoreResult<u64> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };

        let mut total = 0;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path == skip || is_temp_file(&path) {
                continue;
            }
            total += entry.metadata()?.len();
        }
        Ok(total)
    }
}

fn is_temp_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let needed = self.usage_excluding(&path)? + value.len() as u64;
        if needed > self.quota_bytes {
            return Err(StoreError::QuotaExceeded {
                needed,
                quota: self.quota_bytes,
            });
        }

        std::fs::create_dir_all(&self.dir)?;
        let temp_path = self.dir.join(format!(".{}.tmp", key));
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;

        self.subscribers.notify(key, StoreEventKind::Set);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                self.subscribers.notify(key, StoreEventKind::Removed);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if is_temp_file(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                keys.push(name.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn subscribe(&self, listener: Listener) {
        self.subscribers.add(listener);
    }
}
