//! UI configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

const THEMES: &[&str] = &["dark", "light"];

/// Terminal UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Event-loop tick rate in milliseconds; also drives the progress
    /// clock while playing
    pub tick_rate_ms: u64,

    /// Color theme name
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            theme: "dark".to_string(),
        }
    }
}

impl ConfigSection for UiConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = vec![Validator::in_range(
            self.tick_rate_ms,
            16,
            1000,
            "ui.tick_rate_ms",
        )];

        if !THEMES.contains(&self.theme.as_str()) {
            checks.push(Err(ValidationError::with_value(
                "ui.theme",
                format!("must be one of: {}", THEMES.join(", ")),
                &self.theme,
            )));
        }

        Validator::collect_errors(checks)
    }

    fn merge(&mut self, other: Self) {
        self.tick_rate_ms = other.tick_rate_ms;
        self.theme = other.theme;
    }

    fn section_name(&self) -> &'static str {
        "ui"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_too_fast_tick_rejected() {
        let config = UiConfig {
            tick_rate_ms: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let config = UiConfig {
            theme: "neon".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = UiConfig::default();
        let other = UiConfig {
            tick_rate_ms: 100,
            theme: "light".to_string(),
        };

        base.merge(other);
        assert_eq!(base.tick_rate_ms, 100);
        assert_eq!(base.theme, "light");
    }
}
