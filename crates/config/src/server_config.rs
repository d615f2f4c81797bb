//! Feed server configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Where and how to reach the episode feed server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the feed server
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// How many episodes the home listing fetches
    pub page_limit: usize,

    /// How many of those are highlighted as latest releases
    pub latest_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout_secs: 30,
            page_limit: 12,
            latest_count: 2,
        }
    }
}

impl ConfigSection for ServerConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = vec![
            Validator::not_empty(&self.base_url, "server.base_url"),
            Validator::is_http_url(&self.base_url, "server.base_url"),
            Validator::in_range(self.timeout_secs, 1, 300, "server.timeout_secs"),
            Validator::in_range(self.page_limit, 1, 100, "server.page_limit"),
        ];

        if self.latest_count > self.page_limit {
            checks.push(Err(ValidationError::with_value(
                "server.latest_count",
                "must not exceed server.page_limit",
                self.latest_count,
            )));
        }

        Validator::collect_errors(checks)
    }

    fn merge(&mut self, other: Self) {
        self.base_url = other.base_url;
        self.timeout_secs = other.timeout_secs;
        self.page_limit = other.page_limit;
        self.latest_count = other.latest_count;
    }

    fn section_name(&self) -> &'static str {
        "server"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config = ServerConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_url_rejected() {
        let config = ServerConfig {
            base_url: "file:///episodes".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ServerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_latest_count_bounded_by_page_limit() {
        let config = ServerConfig {
            page_limit: 5,
            latest_count: 6,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = ServerConfig::default();
        let other = ServerConfig {
            base_url: "https://feed.example.com".to_string(),
            ..Default::default()
        };

        base.merge(other);
        assert_eq!(base.base_url, "https://feed.example.com");
    }
}
