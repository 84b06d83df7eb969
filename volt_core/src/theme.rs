//! # Theme Service
//!
//! Named color presets plus a user-customizable palette, persisted through
//! the same [`KeyValueStorage`] the history uses. A theme is a flat map of
//! color roles to hex strings; front ends translate the roles into their
//! own styling variables.
//!
//! The palette and the active preset name are stored under separate keys
//! so a custom palette can coexist with the record of which preset it was
//! derived from. Missing or corrupt persisted data falls back to `dark`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::VoltResult;
use crate::storage::KeyValueStorage;

/// Storage key for the active palette.
pub const THEME_KEY: &str = "voltaic_theme";
/// Storage key for the active preset name.
pub const THEME_NAME_KEY: &str = "voltaic_theme_name";

/// Name reported while a hand-edited palette is active.
pub const CUSTOM_THEME: &str = "custom";

/// A flat color-role → hex-color palette.
///
/// BTreeMap keeps serialization order stable across saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeConfig {
    pub colors: BTreeMap<String, String>,
}

impl ThemeConfig {
    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        ThemeConfig {
            colors: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Color assigned to `role`, if the palette defines it
    pub fn color(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(String::as_str)
    }
}

/// Built-in preset names, in menu order.
pub const PRESET_NAMES: [&str; 4] = ["light", "dark", "hacker", "engineering"];

/// Look up a built-in preset palette by name.
pub fn preset(name: &str) -> Option<ThemeConfig> {
    let pairs: &[(&str, &str)] = match name {
        "light" => &[
            ("bg", "#ffffff"),
            ("card", "#ffffff"),
            ("text", "#212529"),
            ("gold", "#d4af37"),
            ("primary", "#007bff"),
            ("secondary", "#6c757d"),
        ],
        "dark" => &[
            ("bg", "#121212"),
            ("card", "#1e1e1e"),
            ("text", "#f8f9fa"),
            ("gold", "#ffcc33"),
            ("primary", "#0d6efd"),
            ("secondary", "#6c757d"),
        ],
        "hacker" => &[
            ("bg", "#000000"),
            ("card", "#0d0d0d"),
            ("text", "#00ff41"),
            ("gold", "#008f11"),
            ("primary", "#00ff41"),
            ("secondary", "#008f11"),
        ],
        "engineering" => &[
            ("bg", "#0c2233"),
            ("card", "#1a3a5f"),
            ("text", "#e0f7ff"),
            ("gold", "#4dabf7"),
            ("primary", "#1976d2"),
            ("secondary", "#64b5f6"),
            ("accent", "#82b1ff"),
        ],
        _ => return None,
    };
    Some(ThemeConfig::from_pairs(pairs))
}

fn dark() -> ThemeConfig {
    preset("dark").unwrap_or_else(|| ThemeConfig {
        colors: BTreeMap::new(),
    })
}

/// Theme persistence over an injected storage backend.
pub struct ThemeService<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> ThemeService<S> {
    pub fn new(storage: S) -> Self {
        ThemeService { storage }
    }

    /// The persisted palette, or the `dark` preset if nothing valid is saved.
    pub fn saved_theme(&self) -> ThemeConfig {
        self.storage
            .get(THEME_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_else(dark)
    }

    /// The persisted preset name, `dark` if none.
    pub fn current_name(&self) -> String {
        self.storage
            .get(THEME_NAME_KEY)
            .unwrap_or_else(|| "dark".to_string())
    }

    /// Whether the active palette is hand-edited rather than a preset.
    pub fn is_custom(&self) -> bool {
        self.current_name() == CUSTOM_THEME
    }

    /// Persist a palette under the given name.
    ///
    /// Saving as [`CUSTOM_THEME`] keeps the previous preset name on record,
    /// so switching back to it restores the unedited palette.
    pub fn apply(&mut self, config: &ThemeConfig, name: &str) -> VoltResult<()> {
        let json = serde_json::to_string(config)?;
        self.storage.set(THEME_KEY, &json)?;
        if name != CUSTOM_THEME {
            self.storage.set(THEME_NAME_KEY, name)?;
        }
        Ok(())
    }

    /// Persist a built-in preset by name. Unknown names are a no-op and
    /// return `false`.
    pub fn apply_preset(&mut self, name: &str) -> VoltResult<bool> {
        match preset(name) {
            Some(config) => {
                self.apply(&config, name)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
