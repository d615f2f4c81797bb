//! Player configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Player preferences and behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start playback as soon as an episode is loaded
    pub autoplay: bool,

    /// Seconds moved per seek key press
    pub seek_step_secs: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            seek_step_secs: 10,
        }
    }
}

impl ConfigSection for PlayerConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![Validator::in_range(
            self.seek_step_secs,
            1,
            300,
            "player.seek_step_secs",
        )])
    }

    fn merge(&mut self, other: Self) {
        self.autoplay = other.autoplay;
        self.seek_step_secs = other.seek_step_secs;
    }

    fn section_name(&self) -> &'static str {
        "player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PlayerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_seek_step_rejected() {
        let config = PlayerConfig {
            seek_step_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = PlayerConfig::default();
        let other = PlayerConfig {
            autoplay: false,
            seek_step_secs: 30,
        };

        base.merge(other);
        assert!(!base.autoplay);
        assert_eq!(base.seek_step_secs, 30);
    }
}
