// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building configuration value types
//!
//! A [`BuildingConfig`] fully determines one generated building; generation
//! is a pure function of this value. The generator performs no validation,
//! so UI layers are expected to clamp edits with [`crate::ranges`] before
//! handing a config over.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Staircase parameters shared by every flight of the building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaircaseConfig {
    pub step_width: f64,
    pub step_depth: f64,
    pub number_of_steps: u32,
    /// Horizontal offset of the staircase footprint along the width (X) axis.
    pub step_x_position: f64,
    /// Horizontal offset of the staircase footprint along the depth (Z) axis.
    /// Despite the name, this never moves the staircase vertically; vertical
    /// position always derives from the floor elevation.
    pub step_y_position: f64,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            step_width: 1.5,
            step_depth: 0.7,
            number_of_steps: 7,
            step_x_position: 0.0,
            step_y_position: 0.0,
        }
    }
}

/// Full parameter set for one building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingConfig {
    /// Footprint extent along X.
    pub width: f64,
    /// Footprint extent along Z.
    pub height: f64,
    pub floors: u32,
    pub floor_height: f64,
    /// Vertical gap between the top of one storey and the next slab.
    pub floor_spacing: f64,
    /// Column grid is `columns × columns`.
    pub columns: u32,
    pub column_spacing: f64,
    pub walls_opacity: f64,
    pub staircase: StaircaseConfig,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 15.0,
            floors: 4,
            floor_height: 3.0,
            floor_spacing: 0.1,
            columns: 4,
            column_spacing: 5.0,
            walls_opacity: 0.5,
            staircase: StaircaseConfig::default(),
        }
    }
}

impl BuildingConfig {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuildingConfig::default();
        assert_eq!(config.floors, 4);
        assert_eq!(config.columns, 4);
        assert_eq!(config.width, 20.0);
        assert_eq!(config.height, 15.0);
        assert_eq!(config.floor_height, 3.0);
        assert_eq!(config.floor_spacing, 0.1);
        assert_eq!(config.column_spacing, 5.0);
        assert_eq!(config.walls_opacity, 0.5);
        assert_eq!(config.staircase.number_of_steps, 7);
        assert_eq!(config.staircase.step_width, 1.5);
        assert_eq!(config.staircase.step_depth, 0.7);
    }

    #[test]
    fn test_json_round_trip() {
        let config = BuildingConfig {
            floors: 7,
            walls_opacity: 0.2,
            ..Default::default()
        };

        let json = config.to_json().unwrap();
        let restored = BuildingConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = BuildingConfig::default().to_json().unwrap();
        assert!(json.contains("\"floorHeight\""));
        assert!(json.contains("\"numberOfSteps\""));
        assert!(json.contains("\"stepYPosition\""));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(BuildingConfig::from_json("not json").is_err());
    }
}
