//! Loading `UserDetails` from storage.
//!
//! Stored records may come from older builds or be hand-edited, so the raw
//! JSON is merged over a complete default record and every image field is
//! checked before the result is trusted.

use crate::store::{Hydration, KeyValueStore, PersistStatus, PersistedValue, Phase};
use folio_types::{UserDetails, is_data_image_uri, keys, sanitize_image};
use serde_json::Value;
use std::sync::Arc;

/// Merge a stored record over `defaults` and validate its images.
///
/// Errors only when `raw` is not a JSON object. A present field with the wrong
/// shape keeps its default and the rest of the record is still merged.
pub fn parse_user_details(raw: &str, defaults: &UserDetails) -> Result<UserDetails, String> {
    let stored: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let Value::Object(stored) = stored else {
        return Err("stored user details are not an object".to_string());
    };

    let mut merged = match serde_json::to_value(defaults).map_err(|e| e.to_string())? {
        Value::Object(map) => map,
        _ => return Err("default user details did not serialize to an object".to_string()),
    };
    for (field, value) in stored {
        if value.is_null() {
            continue;
        }
        let previous = merged.insert(field.clone(), value);
        if let Err(err) = serde_json::from_value::<UserDetails>(Value::Object(merged.clone())) {
            tracing::warn!(field = %field, error = %err, "ignoring stored field with the wrong shape");
            match previous {
                Some(previous) => merged.insert(field, previous),
                None => merged.remove(&field),
            };
        }
    }

    let mut user: UserDetails =
        serde_json::from_value(Value::Object(merged)).map_err(|e| e.to_string())?;

    user.profile_image = sanitize_image(&user.profile_image, &defaults.profile_image);
    user.background_image = sanitize_image(&user.background_image, &defaults.background_image);
    for project in &mut user.projects {
        if !is_data_image_uri(&project.image) {
            project.image.clear();
        }
    }
    Ok(user)
}

/// Hydrate from an optional raw value; anything unusable yields `defaults`.
pub fn hydrate_user_details(raw: Option<&str>, defaults: &UserDetails) -> UserDetails {
    let Some(raw) = raw else {
        return defaults.clone();
    };
    match parse_user_details(raw, defaults) {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, "discarding stored user details");
            defaults.clone()
        }
    }
}

/// `UserDetails` bound to the `userDetails` key.
///
/// Writes are held back until hydration has run, so the default profile can
/// never clobber a stored one.
pub struct UserDetailsStore {
    inner: PersistedValue<UserDetails>,
}

impl UserDetailsStore {
    pub fn new(store: Arc<dyn KeyValueStore>, defaults: UserDetails) -> Self {
        let fallback = defaults.clone();
        let inner = PersistedValue::new(store, keys::USER_DETAILS, defaults)
            .with_parser(move |raw| parse_user_details(raw, &fallback))
            .guard_until_hydrated();
        Self { inner }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.phase() == Phase::Initial
    }

    pub fn hydrate(&mut self) -> Hydration {
        self.inner.hydrate()
    }

    pub fn value(&self) -> &UserDetails {
        self.inner.value()
    }

    pub fn set(&mut self, user: UserDetails) -> PersistStatus {
        self.inner.set(user)
    }

    pub fn update<F>(&mut self, f: F) -> PersistStatus
    where
        F: FnOnce(&UserDetails) -> UserDetails,
    {
        self.inner.update(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn defaults_with_images() -> UserDetails {
        UserDetails {
            profile_image: "data:image/gif;base64,DEFAULT".to_string(),
            ..UserDetails::sample()
        }
    }

    #[test]
    fn test_partial_record_gets_every_field() {
        let raw = json!({ "name": "Sam Lee", "skills": ["Go"] }).to_string();
        let user = hydrate_user_details(Some(&raw), &UserDetails::sample());

        assert_eq!(user.name, "Sam Lee");
        assert_eq!(user.skills, vec!["Go".to_string()]);
        assert_eq!(user.title, UserDetails::sample().title);
        assert_eq!(user.projects, UserDetails::sample().projects);
        assert_eq!(user.social_links, UserDetails::sample().social_links);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let raw = json!({ "bio": null, "socialLinks": null }).to_string();
        let user = hydrate_user_details(Some(&raw), &UserDetails::sample());
        assert_eq!(user.bio, UserDetails::sample().bio);
        assert_eq!(user.social_links, UserDetails::sample().social_links);
    }

    #[test]
    fn test_invalid_profile_images_fall_back_to_default_image() {
        let defaults = defaults_with_images();
        let raw = json!({
            "profileImage": "https://example.com/me.png",
            "backgroundImage": "blob:abc"
        })
        .to_string();

        let user = hydrate_user_details(Some(&raw), &defaults);
        assert_eq!(user.profile_image, defaults.profile_image);
        assert_eq!(user.background_image, "");
    }

    #[test]
    fn test_valid_images_pass_through() {
        let raw = json!({
            "profileImage": PNG,
            "projects": [{ "title": "A", "description": "", "tags": [], "image": PNG }]
        })
        .to_string();

        let user = hydrate_user_details(Some(&raw), &defaults_with_images());
        assert_eq!(user.profile_image, PNG);
        assert_eq!(user.projects[0].image, PNG);
    }

    #[test]
    fn test_invalid_project_images_become_empty() {
        let raw = json!({
            "projects": [
                { "title": "A", "image": "/static/a.png" },
                { "title": "B", "image": PNG },
                { "title": "C" }
            ]
        })
        .to_string();

        let user = hydrate_user_details(Some(&raw), &UserDetails::sample());
        let images: Vec<_> = user.projects.iter().map(|p| p.image.as_str()).collect();
        assert_eq!(images, vec!["", PNG, ""]);
        assert!(user.projects[0].tags.is_empty());
    }

    #[test]
    fn test_garbage_yields_defaults() {
        let defaults = UserDetails::sample();
        for raw in ["{oops", "[1,2,3]", "\"text\""] {
            assert_eq!(hydrate_user_details(Some(raw), &defaults), defaults, "{}", raw);
        }
        assert_eq!(hydrate_user_details(None, &defaults), defaults);
    }

    #[test]
    fn test_wrong_shaped_field_keeps_only_its_default() {
        let defaults = UserDetails::sample();
        let raw = json!({
            "name": "Kim",
            "skills": "Go",
            "experience": [{ "position": 3 }],
            "socialLinks": { "github": "https://github.com/kim" }
        })
        .to_string();

        let user = hydrate_user_details(Some(&raw), &defaults);
        assert_eq!(user.name, "Kim");
        assert_eq!(user.skills, defaults.skills);
        assert_eq!(user.experience, defaults.experience);
        assert_eq!(
            user.social_links.github.as_deref(),
            Some("https://github.com/kim")
        );
    }

    #[test]
    fn test_hydration_is_idempotent() {
        let raw = json!({ "name": "Kim", "profileImage": "nope" }).to_string();
        let first = hydrate_user_details(Some(&raw), &defaults_with_images());
        let second = hydrate_user_details(Some(&raw), &defaults_with_images());
        assert_eq!(first, second);
    }

    #[test]
    fn test_store_hydration_does_not_write() {
        let raw = json!({ "name": "Stored Name" }).to_string();
        let memory = Arc::new(MemoryStore::seeded([(keys::USER_DETAILS, raw)]));
        let mut user_store = UserDetailsStore::new(memory.clone(), UserDetails::sample());

        assert!(user_store.is_loading());
        assert_eq!(user_store.value().name, UserDetails::sample().name);

        assert_eq!(user_store.hydrate(), Hydration::Loaded);
        assert!(!user_store.is_loading());
        assert_eq!(user_store.value().name, "Stored Name");
        assert_eq!(memory.write_count(), 0);
    }

    #[test]
    fn test_store_write_before_hydration_is_deferred() {
        let raw = json!({ "name": "Stored Name" }).to_string();
        let memory = Arc::new(MemoryStore::seeded([(keys::USER_DETAILS, raw.clone())]));
        let mut user_store = UserDetailsStore::new(memory.clone(), UserDetails::sample());

        let status = user_store.update(|prev| UserDetails {
            name: "Clobber".to_string(),
            ..prev.clone()
        });
        assert_eq!(status, PersistStatus::Deferred);
        assert_eq!(memory.get_item(keys::USER_DETAILS).unwrap(), Some(raw));

        user_store.hydrate();
        let status = user_store.update(|prev| UserDetails {
            title: "Engineer".to_string(),
            ..prev.clone()
        });
        assert!(status.is_persisted());
        assert_eq!(memory.write_count(), 1);
    }
}
