// Configuration module
// Persisted settings: the enabled flag and the ordered rule list

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::rule::Rule;
use crate::core::store::{SettingsStore, StoreError};

/// Engine settings, owned by the app and passed to each trigger by reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Expand while typing
    #[serde(rename = "autoReplace", alias = "autoReplaceEnabled", default = "default_true")]
    pub auto_replace: bool,
    /// Rules in priority order (earlier wins ties)
    #[serde(default)]
    pub replacements: Vec<Rule>,
}

fn default_true() -> bool {
    true
}

/// Text of a legacy map value. Scalars keep their printed form.
fn legacy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_replace: true,
            replacements: Vec::new(),
        }
    }
}

/// Result of decoding stored settings
#[derive(Debug, PartialEq, Eq)]
pub struct Loaded {
    pub settings: Settings,
    /// The stored data used the flat `{abbr: expansion}` shape
    pub migrated: bool,
}

impl Settings {
    /// Decode stored JSON, migrating the legacy flat `replacements` map.
    pub fn from_value(mut value: Value) -> Result<Loaded, serde_json::Error> {
        let mut migrated = false;

        if let Some(obj) = value.as_object_mut() {
            if let Some(Value::Object(legacy)) = obj.get("replacements") {
                let rules: Vec<Value> = legacy
                    .iter()
                    .filter_map(|(abbr, expanded)| {
                        let Some(expanded) = legacy_text(expanded) else {
                            log::warn!("dropping legacy replacement '{}': not text", abbr);
                            return None;
                        };
                        Some(serde_json::json!({
                            "abbr": abbr,
                            "expanded": expanded,
                            "folder": "",
                            "manualOnly": false,
                        }))
                    })
                    .collect();
                obj.insert("replacements".to_string(), Value::Array(rules));
                migrated = true;
            }
        }

        let settings = serde_json::from_value(value)?;
        Ok(Loaded { settings, migrated })
    }

    /// Load settings from `store`.
    ///
    /// Never fails: missing data gives defaults, unreadable data is logged
    /// and gives defaults. Incomplete rules are dropped. Legacy data is
    /// migrated and saved back at once.
    pub fn load_from(store: &mut dyn SettingsStore) -> Self {
        let value = match store.load() {
            Ok(Some(value)) => value,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::error!("Failed to load settings: {}", e);
                return Self::default();
            }
        };

        let mut loaded = match Self::from_value(value) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::error!("Failed to load settings: {}", e);
                return Self::default();
            }
        };
        loaded.settings.sanitize();

        if loaded.migrated {
            log::info!(
                "migrated {} legacy replacement(s)",
                loaded.settings.replacements.len()
            );
            if let Err(e) = store.save(&loaded.settings) {
                log::error!("Failed to save migrated settings: {}", e);
            }
        }

        loaded.settings
    }

    /// Persist to `store`
    pub fn save_to(&self, store: &mut dyn SettingsStore) -> Result<(), StoreError> {
        store.save(self)
    }

    /// Drop rules with a blank or multi-line abbreviation or expansion
    pub fn sanitize(&mut self) {
        let before = self.replacements.len();
        self.replacements.retain(Rule::is_valid);
        let dropped = before - self.replacements.len();
        if dropped > 0 {
            log::warn!("dropped {} incomplete rule(s)", dropped);
        }
    }
}
