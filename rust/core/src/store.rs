// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named in-memory configuration store
//!
//! Maps building names to saved configurations. Nothing here is durable:
//! the store lives and dies with its owner.

use crate::config::BuildingConfig;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// In-memory key-value store for named building configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    buildings: FxHashMap<String, BuildingConfig>,
}

impl ConfigStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a config under a name, replacing any existing entry
    ///
    /// Rejects empty or whitespace-only names.
    pub fn save(&mut self, name: &str, config: BuildingConfig) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        self.buildings.insert(name.to_string(), config);
        Ok(())
    }

    /// Load a saved config by name
    pub fn load(&self, name: &str) -> Result<&BuildingConfig> {
        self.buildings
            .get(name.trim())
            .ok_or_else(|| Error::UnknownBuilding(name.trim().to_string()))
    }

    /// Remove a saved config, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<BuildingConfig> {
        self.buildings.remove(name.trim())
    }

    /// Check whether a name is saved
    pub fn contains(&self, name: &str) -> bool {
        self.buildings.contains_key(name.trim())
    }

    /// Saved building names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.buildings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of saved configs
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}
