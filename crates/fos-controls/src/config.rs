//! Controls Configuration

use fos_media::TextTrackMode;
use serde::{Deserialize, Serialize};

use crate::error::{ControlsError, Result};

/// Control surface configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Label of the synthetic "subtitles off" menu entry
    pub off_label: String,

    /// Mode every track is forced into when the menu is built
    pub idle_track_mode: TextTrackMode,

    /// Hide the subtitle menu after a choice is made
    pub close_menu_on_select: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            off_label: "Off".to_string(),
            idle_track_mode: TextTrackMode::Hidden,
            close_menu_on_select: true,
        }
    }
}

impl ControlsConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.idle_track_mode == TextTrackMode::Showing {
            return Err(ControlsError::InvalidConfig(
                "idle_track_mode cannot be \"showing\"".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let config = ControlsConfig::from_json(r#"{ "off_label": "None" }"#).unwrap();
        assert_eq!(config.off_label, "None");
        assert_eq!(config.idle_track_mode, TextTrackMode::Hidden);
        assert!(config.close_menu_on_select);
    }

    #[test]
    fn test_disabled_mode() {
        let config = ControlsConfig::from_json(r#"{ "idle_track_mode": "disabled" }"#).unwrap();
        assert_eq!(config.idle_track_mode, TextTrackMode::Disabled);
    }

    #[test]
    fn test_rejects_showing() {
        let err = ControlsConfig::from_json(r#"{ "idle_track_mode": "showing" }"#).unwrap_err();
        assert!(matches!(err, ControlsError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = ControlsConfig::from_json("{ off_label").unwrap_err();
        assert!(matches!(err, ControlsError::Config(_)));
    }
}
