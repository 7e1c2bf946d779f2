//! Layered render configuration.
//!
//! A [`Configuration`] is an untyped JSON object handed to the renderer
//! as-is. It is assembled from two layers:
//!
//! 1. the base layer, loaded from the optional `--config` JSON file;
//! 2. the override layer, built from explicit CLI flags.
//!
//! [`ConfigLayers::merge`] applies the override layer key by key on top of
//! the base; the override always wins. Nested objects are replaced, not
//! deep-merged.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::IfgcError;

/// Key the `--theme` flag writes to.
pub const THEME_KEY: &str = "theme";
/// Key the `--background` flag writes to.
pub const BACKGROUND_KEY: &str = "background";

/// String-keyed settings passed through to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. The top level must be an object.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read and parse the configuration file at `path`.
    pub async fn load(path: &Path) -> Result<Self, IfgcError> {
        let invalid = |reason: String| IfgcError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        };
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| invalid(e.to_string()))?;
        let config = Self::from_json_str(&raw).map_err(|e| invalid(e.to_string()))?;
        tracing::debug!(path = %path.display(), keys = config.len(), "loaded configuration file");
        Ok(config)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value at `key` when it is a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Copy every key of `overrides` onto `self`, replacing existing values.
    pub fn apply(&mut self, overrides: Configuration) {
        for (key, value) in overrides.0 {
            self.0.insert(key, value);
        }
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// The two configuration sources, kept apart until [`ConfigLayers::merge`].
#[derive(Debug, Clone, Default)]
pub struct ConfigLayers {
    pub base: Configuration,
    pub overrides: Configuration,
}

impl ConfigLayers {
    /// Build the override layer from CLI flags. Absent flags add no key.
    pub fn with_flag_overrides(
        base: Configuration,
        theme: Option<&str>,
        background: Option<&str>,
    ) -> Self {
        let mut overrides = Configuration::new();
        if let Some(theme) = theme {
            overrides.insert(THEME_KEY, theme);
        }
        if let Some(background) = background {
            overrides.insert(BACKGROUND_KEY, background);
        }
        Self { base, overrides }
    }

    pub fn merge(self) -> Configuration {
        let mut merged = self.base;
        merged.apply(self.overrides);
        merged
    }
}
