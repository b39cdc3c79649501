//! User override configuration (`custom.toml`).
//!
//! This is the runtime-supplied side of resolution: per-name enable/disable
//! decisions plus the default state for names left unmentioned. A missing
//! file simply means "all defaults" — the overrides are optional by design,
//! the manifest is not.
//!
//! ```toml
//! components_enabled_by_default = true
//! classes_enabled_by_default = true
//!
//! [components]
//! editor = false
//!
//! [classes]
//! GridRect = false
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{FeatconfError, Result};

/// Default override filename, looked up next to the manifest.
pub const DEFAULT_CONFIG: &str = "custom.toml";

const fn default_true() -> bool {
    true
}

/// Parsed override file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideConfig {
    /// Default state for components not listed in `[components]`.
    #[serde(default = "default_true")]
    pub components_enabled_by_default: bool,

    /// Default state for classes not listed in `[classes]`.
    #[serde(default = "default_true")]
    pub classes_enabled_by_default: bool,

    /// Explicit component overrides.
    #[serde(default)]
    pub components: BTreeMap<String, bool>,

    /// Explicit class overrides.
    #[serde(default)]
    pub classes: BTreeMap<String, bool>,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            components_enabled_by_default: true,
            classes_enabled_by_default: true,
            components: BTreeMap::new(),
            classes: BTreeMap::new(),
        }
    }
}

impl OverrideConfig {
    /// Load the override file, or the all-defaults configuration if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// [`FeatconfError::ConfigParseError`] for unreadable or invalid TOML.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no override file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|err| FeatconfError::ConfigParseError {
            file: path.display().to_string(),
            reason: err.to_string(),
        })?;
        tracing::info!(path = %path.display(), "loaded override file");
        Ok(config)
    }

    /// Write the configuration back out as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Add entries for catalog names the file doesn't mention yet, mapped to
    /// the current default state. Existing overrides are preserved.
    ///
    /// Returns the newly added names, components first, so the caller can
    /// announce them.
    pub fn sync_with_catalog<S: AsRef<str>>(
        &mut self,
        components: &[S],
        classes: &[S],
    ) -> Vec<String> {
        let mut added = Vec::new();
        for name in components {
            let name = name.as_ref();
            if !self.components.contains_key(name) {
                self.components.insert(name.to_string(), self.components_enabled_by_default);
                added.push(name.to_string());
            }
        }
        for name in classes {
            let name = name.as_ref();
            if !self.classes.contains_key(name) {
                self.classes.insert(name.to_string(), self.classes_enabled_by_default);
                added.push(name.to_string());
            }
        }
        added
    }
}
