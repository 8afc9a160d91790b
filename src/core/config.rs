//! Configuration for the layer manager and per-operation layer options
//!
//! Manager-wide settings live in [`LayerManagerConfig`]; everything a single
//! add request can tweak lives in [`LayerOptions`].

use serde::{Deserialize, Serialize};

use crate::{
    core::constants::{DEFAULT_LAYER_NAME, ZINDEX_BASE_FEATURE_LAYER, ZINDEX_BASE_MAP_LAYER},
    MapError, Result,
};

/// Manager-wide naming and stacking settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerManagerConfig {
    /// Substituted for blank layer names
    pub default_layer_name: String,
    /// Base z-index for map (background) layers, at least 1
    pub map_layer_z_base: i64,
    /// Base z-index for feature layers, at least 10000 and above the map base
    pub feature_layer_z_base: i64,
}

impl Default for LayerManagerConfig {
    fn default() -> Self {
        Self {
            default_layer_name: DEFAULT_LAYER_NAME.to_string(),
            map_layer_z_base: ZINDEX_BASE_MAP_LAYER,
            feature_layer_z_base: ZINDEX_BASE_FEATURE_LAYER,
        }
    }
}

impl LayerManagerConfig {
    /// Parses a config from JSON, filling omitted fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the name and stacking invariants every layer relies on.
    pub fn validate(&self) -> Result<()> {
        if self.default_layer_name.trim().is_empty() {
            return Err(MapError::Config(
                "default layer name must not be blank".to_string(),
            ));
        }

        if self.map_layer_z_base < ZINDEX_BASE_MAP_LAYER {
            return Err(MapError::Config(format!(
                "map layer z base ({}) must be at least {}",
                self.map_layer_z_base, ZINDEX_BASE_MAP_LAYER
            )));
        }

        if self.feature_layer_z_base < ZINDEX_BASE_FEATURE_LAYER {
            return Err(MapError::Config(format!(
                "feature layer z base ({}) must be at least {}",
                self.feature_layer_z_base, ZINDEX_BASE_FEATURE_LAYER
            )));
        }

        if self.feature_layer_z_base <= self.map_layer_z_base {
            return Err(MapError::Config(format!(
                "feature layer z base ({}) must be above map layer z base ({})",
                self.feature_layer_z_base, self.map_layer_z_base
            )));
        }

        Ok(())
    }

    /// Trims `name`, falling back to the default layer name when nothing is left.
    pub fn validate_name(&self, name: &str) -> String {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.default_layer_name.clone()
        } else {
            trimmed.to_string()
        }
    }
}

/// Flags letting external UI hide per-layer controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerButtons {
    pub disable_visibility: bool,
    pub disable_edit: bool,
    pub disable_delete: bool,
    pub disable_download: bool,
}

/// Options captured with an add or remove request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerOptions {
    /// Initial visibility of a newly created feature layer.
    /// Map layers keep the visibility of the renderable they were given.
    pub visible: bool,
    /// Suppresses downstream UI reactions to the lifecycle notification
    pub silent: bool,
    pub buttons: LayerButtons,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            visible: true,
            silent: false,
            buttons: LayerButtons::default(),
        }
    }
}

impl LayerOptions {
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_buttons(mut self, buttons: LayerButtons) -> Self {
        self.buttons = buttons;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayerManagerConfig::default();
        assert_eq!(config.default_layer_name, "New layer");
        assert_eq!(config.map_layer_z_base, 1);
        assert_eq!(config.feature_layer_z_base, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_name() {
        let config = LayerManagerConfig::default();
        assert_eq!(config.validate_name("   "), "New layer");
        assert_eq!(config.validate_name(""), "New layer");
        assert_eq!(config.validate_name("Trails"), "Trails");
        assert_eq!(config.validate_name("  Roads \t"), "Roads");
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = LayerManagerConfig::from_json_str(r#"{ "default_layer_name": "Untitled" }"#)
            .unwrap();
        assert_eq!(config.default_layer_name, "Untitled");
        assert_eq!(config.feature_layer_z_base, 10_000);
    }

    #[test]
    fn test_config_rejects_inverted_bases() {
        let result = LayerManagerConfig::from_json_str(
            r#"{ "map_layer_z_base": 500, "feature_layer_z_base": 100 }"#,
        );
        assert!(matches!(result, Err(MapError::Config(_))));
    }

    #[test]
    fn test_config_rejects_bases_below_minimum() {
        let result = LayerManagerConfig::from_json_str(
            r#"{ "map_layer_z_base": 0, "feature_layer_z_base": 2 }"#,
        );
        assert!(matches!(result, Err(MapError::Config(_))));

        let result = LayerManagerConfig::from_json_str(r#"{ "feature_layer_z_base": 9999 }"#);
        assert!(matches!(result, Err(MapError::Config(_))));

        let config = LayerManagerConfig::from_json_str(
            r#"{ "map_layer_z_base": 100, "feature_layer_z_base": 20000 }"#,
        )
        .unwrap();
        assert_eq!(config.map_layer_z_base, 100);
    }

    #[test]
    fn test_config_rejects_blank_default_name() {
        let result = LayerManagerConfig::from_json_str(r#"{ "default_layer_name": "  " }"#);
        assert!(matches!(result, Err(MapError::Config(_))));
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let result = LayerManagerConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(MapError::Serialization(_))));
    }

    #[test]
    fn test_layer_options_defaults() {
        let options = LayerOptions::default();
        assert!(options.visible);
        assert!(!options.silent);
        assert_eq!(options.buttons, LayerButtons::default());
        assert!(!options.buttons.disable_delete);

        let options = LayerOptions::default()
            .silent()
            .hidden()
            .with_buttons(LayerButtons {
                disable_delete: true,
                ..LayerButtons::default()
            });
        assert!(options.silent);
        assert!(!options.visible);
        assert!(options.buttons.disable_delete && !options.buttons.disable_edit);
    }
}
