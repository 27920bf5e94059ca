use std::collections::HashMap;

use serde::Deserialize;

use super::RagConfig;
use crate::errors::ConfigError;

/// Named configuration presets, loaded from a TOML document.
///
/// Shape:
///
/// ```toml
/// [default.retrieval]
/// dense_limit = 20
///
/// [presets.precision.retrieval]
/// mmr_lambda = 1.0
/// ```
///
/// Every preset is validated at load time. Lookup of a missing preset is a
/// hard [`ConfigError::PresetNotFound`] — fallback to the default is the
/// caller's decision, never this store's.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    default: RagConfig,
    presets: HashMap<String, RagConfig>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PresetFile {
    default: RagConfig,
    presets: HashMap<String, RagConfig>,
}

impl PresetStore {
    /// Parse and validate a preset document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let file: PresetFile = toml::from_str(input)?;
        file.default.validate()?;
        for (name, config) in &file.presets {
            config.validate().map_err(|e| ConfigError::Invalid {
                reason: format!("preset '{name}': {e}"),
            })?;
        }
        Ok(Self {
            default: file.default,
            presets: file.presets,
        })
    }

    /// Resolve a preset by name; `None` means the default preset.
    pub fn get(&self, name: Option<&str>) -> Result<&RagConfig, ConfigError> {
        match name {
            None => Ok(&self.default),
            Some(name) => self.presets.get(name).ok_or_else(|| {
                ConfigError::PresetNotFound {
                    name: name.to_string(),
                }
            }),
        }
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}
