//! Cache of visible fields per entity type.
//!
//! Every concrete entity type (`story`, `defect`, ...) has a bundled set of
//! default fields shown in its detail window. Users can pick another set; the
//! customization is persisted under [`VISIBLE_FIELDS_KEY`] and can be reset to
//! the defaults at any time. Unlike the session stores this cache is not scoped
//! to a connection.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::FieldsMetadata;
use crate::error::Result;
use crate::settings::{SettingsStore, VISIBLE_FIELDS_KEY};

/// Default fields bundled with the extension.
pub const DEFAULT_FIELDS_JSON: &str = include_str!("../../resources/default_fields.json");

pub struct FieldsCache {
    defaults: FieldsMetadata,
    customized: FieldsMetadata,
    settings: Arc<dyn SettingsStore>,
}

impl FieldsCache {
    /// Loads the bundled defaults and the persisted customizations.
    pub fn load(settings: Arc<dyn SettingsStore>) -> Self {
        Self::with_defaults(settings, DEFAULT_FIELDS_JSON)
    }

    /// Loads with an explicit defaults document.
    ///
    /// A malformed defaults document leaves every type without defaults.
    pub fn with_defaults(settings: Arc<dyn SettingsStore>, defaults_json: &str) -> Self {
        let defaults = serde_json::from_str::<FieldsMetadata>(defaults_json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "bundled default fields are unreadable");
            FieldsMetadata::default()
        });

        let customized = settings
            .read(VISIBLE_FIELDS_KEY)
            .and_then(|blob| match serde_json::from_str::<FieldsMetadata>(&blob) {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable visible fields");
                    None
                }
            })
            .filter(|metadata| {
                let current = metadata.version == defaults.version;
                if !current {
                    tracing::info!(
                        saved = metadata.version,
                        bundled = defaults.version,
                        "discarding visible fields saved against other defaults"
                    );
                }
                current
            })
            .unwrap_or_else(|| FieldsMetadata::new(defaults.version));

        Self {
            defaults,
            customized,
            settings,
        }
    }

    /// Returns the bundled default fields of `entity_type`.
    pub fn default_fields(&self, entity_type: &str) -> BTreeSet<String> {
        self.defaults.fields(entity_type).cloned().unwrap_or_default()
    }

    /// Returns the fields currently visible for `entity_type`.
    pub fn visible_fields(&self, entity_type: &str) -> BTreeSet<String> {
        self.customized
            .fields(entity_type)
            .or_else(|| self.defaults.fields(entity_type))
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_field_visible(&self, entity_type: &str, field_name: &str) -> bool {
        self.customized
            .fields(entity_type)
            .or_else(|| self.defaults.fields(entity_type))
            .is_some_and(|fields| fields.contains(field_name))
    }

    /// Replaces the visible fields of `entity_type` with `selected`.
    pub fn set_field_visibility<I, S>(&mut self, entity_type: &str, selected: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: BTreeSet<String> = selected.into_iter().map(Into::into).collect();
        self.customized.data.insert(entity_type.to_string(), fields);
        self.persist();
    }

    /// Drops the customization of `entity_type`, showing its defaults again.
    pub fn reset_to_default(&mut self, entity_type: &str) {
        if self.customized.data.remove(entity_type).is_some() {
            self.persist();
        }
    }

    /// Returns whether exactly the default fields of `entity_type` are visible.
    pub fn only_default_fields_shown(&self, entity_type: &str) -> bool {
        self.visible_fields(entity_type) == self.default_fields(entity_type)
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(key = VISIBLE_FIELDS_KEY, error = %e, "failed to persist visible fields");
        }
    }

    fn try_persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.customized)?;
        self.settings.write(VISIBLE_FIELDS_KEY, blob)?;
        self.settings.commit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;
    use crate::test_support::FailingSettingsStore;

    fn cache() -> FieldsCache {
        FieldsCache::load(Arc::new(MemorySettingsStore::new()))
    }

    #[test]
    fn test_bundled_defaults_are_readable() {
        let defaults: FieldsMetadata = serde_json::from_str(DEFAULT_FIELDS_JSON).unwrap();
        assert!(defaults.version > 0);
        assert!(defaults.fields("story").is_some());
        assert!(defaults.fields("defect").is_some());
    }

    #[test]
    fn test_defaults_are_visible_initially() {
        let cache = cache();
        assert!(cache.is_field_visible("story", "phase"));
        assert!(!cache.is_field_visible("story", "committers"));
        assert!(cache.only_default_fields_shown("story"));
    }

    #[test]
    fn test_unknown_entity_type() {
        let cache = cache();
        assert!(!cache.is_field_visible("no_such_type", "phase"));
        assert!(cache.visible_fields("no_such_type").is_empty());
    }

    #[test]
    fn test_toggle_fields_away_from_and_back_to_defaults() {
        let mut cache = cache();
        let defaults = cache.default_fields("story");

        let without_release: Vec<String> =
            defaults.iter().filter(|f| *f != "release").cloned().collect();
        cache.set_field_visibility("story", without_release);
        assert!(!cache.is_field_visible("story", "release"));
        assert!(!cache.only_default_fields_shown("story"));

        cache.set_field_visibility("story", defaults.clone());
        assert!(cache.only_default_fields_shown("story"));

        let mut with_extra = defaults.clone();
        with_extra.insert("committers".to_string());
        cache.set_field_visibility("story", with_extra);
        assert!(cache.is_field_visible("story", "committers"));
        assert!(!cache.only_default_fields_shown("story"));
    }

    #[test]
    fn test_reset_to_default() {
        let mut cache = cache();
        cache.set_field_visibility("defect", ["severity"]);
        assert_eq!(cache.visible_fields("defect").len(), 1);

        cache.reset_to_default("defect");

        assert_eq!(cache.visible_fields("defect"), cache.default_fields("defect"));
        assert!(cache.only_default_fields_shown("defect"));
    }

    #[test]
    fn test_customization_survives_reload() {
        let settings: Arc<dyn SettingsStore> = Arc::new(MemorySettingsStore::new());
        let mut first = FieldsCache::load(settings.clone());
        first.set_field_visibility("task", ["owner", "phase"]);

        let second = FieldsCache::load(settings);
        assert_eq!(
            second.visible_fields("task"),
            BTreeSet::from(["owner".to_string(), "phase".to_string()])
        );
    }

    #[test]
    fn test_customization_from_other_version_is_discarded() {
        let stale = serde_json::json!({ "version": 999, "data": { "story": ["owner"] } });
        let settings = Arc::new(MemorySettingsStore::with_value(
            VISIBLE_FIELDS_KEY,
            stale.to_string(),
        ));

        let cache = FieldsCache::load(settings);

        assert!(cache.only_default_fields_shown("story"));
    }

    #[test]
    fn test_malformed_defaults_degrade_to_nothing_visible() {
        let cache = FieldsCache::with_defaults(Arc::new(MemorySettingsStore::new()), "[oops");
        assert!(!cache.is_field_visible("story", "phase"));
        assert!(cache.only_default_fields_shown("story"));
    }

    #[test]
    fn test_write_failure_keeps_customization() {
        let mut cache = FieldsCache::load(Arc::new(FailingSettingsStore));
        cache.set_field_visibility("epic", ["owner"]);
        assert!(cache.is_field_visible("epic", "owner"));
        assert!(!cache.is_field_visible("epic", "phase"));
    }
}
