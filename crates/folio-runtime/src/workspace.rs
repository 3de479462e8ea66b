use crate::config::Config;
use crate::hydrate::UserDetailsStore;
use crate::store::{FileStore, Hydration, KeyValueStore, PersistStatus, PersistedValue};
use crate::Result;
use folio_types::{
    PageConfig, PageEditor, SectionConfig, StoredConfig, StyleId, UserDetails, default_pages,
    default_sections, keys, validate_sections,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A failed write, kept so the caller can warn about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistFailure {
    pub key: String,
    pub reason: String,
}

/// All persisted builder state behind one handle.
///
/// [`Workspace::open`] is phase one (nothing read yet); [`Workspace::hydrate`]
/// is phase two. [`Workspace::load`] does both.
pub struct Workspace {
    data_dir: Option<PathBuf>,
    config: Config,
    store: Arc<dyn KeyValueStore>,
    style: PersistedValue<Option<String>>,
    primary_color: PersistedValue<Option<String>>,
    secondary_color: PersistedValue<Option<String>>,
    color_combo_name: PersistedValue<Option<String>>,
    user: UserDetailsStore,
    pages: PersistedValue<Vec<PageConfig>>,
    sections: PersistedValue<Vec<SectionConfig>>,
    failures: Vec<PersistFailure>,
    changed: Arc<Mutex<Vec<String>>>,
}

impl Workspace {
    /// Open the file-backed workspace under `data_dir` without reading storage.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let config = Config::load_from(&Config::default_path(data_dir))?;
        let store = FileStore::new(folio_core::storage_dir(data_dir), config.storage.quota_bytes);
        let mut workspace = Self::with_store(Arc::new(store), config);
        workspace.data_dir = Some(data_dir.to_path_buf());
        Ok(workspace)
    }

    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut workspace = Self::open(data_dir)?;
        workspace.hydrate();
        Ok(workspace)
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>, config: Config) -> Self {
        let changed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changed);
        store.subscribe(Box::new(move |event| {
            if let Ok(mut changed) = sink.lock()
                && !changed.contains(&event.key)
            {
                changed.push(event.key.clone());
            }
        }));

        Self {
            data_dir: None,
            config,
            style: PersistedValue::new(store.clone(), keys::PORTFOLIO_STYLE, None),
            primary_color: PersistedValue::new(store.clone(), keys::PRIMARY_COLOR, None),
            secondary_color: PersistedValue::new(store.clone(), keys::SECONDARY_COLOR, None),
            color_combo_name: PersistedValue::new(store.clone(), keys::COLOR_COMBO_NAME, None),
            user: UserDetailsStore::new(store.clone(), UserDetails::sample()),
            pages: PersistedValue::new(store.clone(), keys::PORTFOLIO_PAGES, default_pages()),
            sections: PersistedValue::new(
                store.clone(),
                keys::PORTFOLIO_SECTIONS,
                default_sections(),
            ),
            store,
            failures: Vec::new(),
            changed,
        }
    }

    /// Phase two: read every key once. Returns the keys that had to be recovered.
    pub fn hydrate(&mut self) -> Vec<(String, String)> {
        let results = [
            (keys::PORTFOLIO_STYLE, self.style.hydrate()),
            (keys::PRIMARY_COLOR, self.primary_color.hydrate()),
            (keys::SECONDARY_COLOR, self.secondary_color.hydrate()),
            (keys::COLOR_COMBO_NAME, self.color_combo_name.hydrate()),
            (keys::USER_DETAILS, self.user.hydrate()),
            (keys::PORTFOLIO_PAGES, self.pages.hydrate()),
            (keys::PORTFOLIO_SECTIONS, self.sections.hydrate()),
        ];

        let mut recovered: Vec<(String, String)> = results
            .into_iter()
            .filter_map(|(key, outcome)| match outcome {
                Hydration::Recovered(reason) => Some((key.to_string(), reason)),
                _ => None,
            })
            .collect();

        let home_repaired = self.pages.repair(|pages| {
            let mut editor = PageEditor::new(std::mem::take(pages));
            let repaired = editor.ensure_home_enabled();
            *pages = editor.into_pages();
            repaired
        });
        if home_repaired {
            tracing::warn!("stored pages had the home page disabled");
            recovered.push((
                keys::PORTFOLIO_PAGES.to_string(),
                "home page re-enabled".to_string(),
            ));
        }

        // Sections pointing at missing pages are kept but never rendered.
        if let Err(err) = validate_sections(self.pages.value(), self.sections.value()) {
            tracing::warn!(error = %err, "stored sections do not match the page list");
            recovered.push((keys::PORTFOLIO_SECTIONS.to_string(), err.to_string()));
        }
        recovered
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> StoredConfig {
        StoredConfig {
            style: self.style.value().clone(),
            primary_color: self.primary_color.value().clone(),
            secondary_color: self.secondary_color.value().clone(),
            color_combo_name: self.color_combo_name.value().clone(),
            user_details: self.user.value().clone(),
            pages: self.pages.value().clone(),
            sections: self.sections.value().clone(),
        }
    }

    pub fn user(&self) -> &UserDetails {
        self.user.value()
    }

    pub fn pages(&self) -> &[PageConfig] {
        self.pages.value()
    }

    pub fn sections(&self) -> &[SectionConfig] {
        self.sections.value()
    }

    pub fn set_style(&mut self, style: StyleId) -> PersistStatus {
        let status = self.style.set(Some(style.as_str().to_string()));
        self.track(keys::PORTFOLIO_STYLE, status)
    }

    /// Store both colors and the combo name (`None` for a custom pair).
    pub fn set_colors(
        &mut self,
        primary: &str,
        secondary: &str,
        combo_name: Option<&str>,
    ) -> PersistStatus {
        let statuses = [
            (
                keys::PRIMARY_COLOR,
                self.primary_color.set(Some(primary.to_string())),
            ),
            (
                keys::SECONDARY_COLOR,
                self.secondary_color.set(Some(secondary.to_string())),
            ),
            (
                keys::COLOR_COMBO_NAME,
                self.color_combo_name.set(combo_name.map(str::to_string)),
            ),
        ];

        let mut overall = PersistStatus::Persisted;
        for (key, status) in statuses {
            let status = self.track(key, status);
            if !status.is_persisted() {
                overall = status;
            }
        }
        overall
    }

    pub fn set_user(&mut self, user: UserDetails) -> PersistStatus {
        let status = self.user.set(user);
        self.track(keys::USER_DETAILS, status)
    }

    /// Apply an in-place edit to the user details, then persist.
    pub fn edit_user<F>(&mut self, edit: F) -> PersistStatus
    where
        F: FnOnce(&mut UserDetails),
    {
        let status = self.user.update(|prev| {
            let mut next = prev.clone();
            edit(&mut next);
            next
        });
        self.track(keys::USER_DETAILS, status)
    }

    pub fn set_pages(&mut self, pages: Vec<PageConfig>) -> PersistStatus {
        let status = self.pages.set(pages);
        self.track(keys::PORTFOLIO_PAGES, status)
    }

    pub fn set_sections(&mut self, sections: Vec<SectionConfig>) -> PersistStatus {
        let status = self.sections.set(sections);
        self.track(keys::PORTFOLIO_SECTIONS, status)
    }

    /// Folio keys currently present in storage, in catalog order.
    pub fn stored_keys(&self) -> Result<Vec<String>> {
        let existing = self.store.keys()?;
        Ok(keys::ALL
            .iter()
            .filter(|key| existing.iter().any(|k| k == *key))
            .map(|key| key.to_string())
            .collect())
    }

    /// Remove every folio key from storage and return how many existed.
    pub fn reset(&mut self) -> Result<usize> {
        let existing = self.store.keys()?;
        let mut removed = 0;
        for key in keys::ALL {
            if existing.iter().any(|k| k == key) {
                self.store.remove_item(key)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Writes that failed since the workspace was opened.
    pub fn failures(&self) -> &[PersistFailure] {
        &self.failures
    }

    /// Keys written or removed since the workspace was opened, in first-touch order.
    pub fn changed_keys(&self) -> Vec<String> {
        self.changed
            .lock()
            .map(|changed| changed.clone())
            .unwrap_or_default()
    }

    fn track(&mut self, key: &str, status: PersistStatus) -> PersistStatus {
        if let PersistStatus::Failed(reason) = &status {
            self.failures.push(PersistFailure {
                key: key.to_string(),
                reason: reason.clone(),
            });
        }
        status
    }
}
