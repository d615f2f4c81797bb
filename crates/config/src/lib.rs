//! PodStream configuration system
//!
//! - **Trait-based**: each concern defines its section as a type
//!   implementing [`ConfigSection`]
//! - **Atomic writes**: the config file is never left half-written
//! - **Zero panics**: all errors are handled via Result types
//!
//! A missing config file is not an error; defaults are usable as-is.

mod error;
mod persistence;
mod validation;

mod player_config;
mod server_config;
mod ui_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use persistence::{default_config_path, ConfigPersistence};
pub use validation::{ConfigSection, Validator};

pub use player_config::PlayerConfig;
pub use server_config::ServerConfig;
pub use ui_config::UiConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Feed server settings
    pub server: ServerConfig,

    /// Player preferences
    pub player: PlayerConfig,

    /// Terminal UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.server.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.player.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.ui.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.server.merge(other.server);
        self.player.merge(other.player);
        self.ui.merge(other.ui);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerConfig::default(),
            player: PlayerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
