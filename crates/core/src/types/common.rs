//! Common types and utilities shared across domain models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration in whole seconds
///
/// Episode durations come from the API as second counts; nothing in the
/// application needs sub-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Duration(u64);

impl Duration {
    /// Zero duration constant
    pub const ZERO: Self = Self(0);

    /// Creates a duration from seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the duration in seconds
    pub fn as_seconds(&self) -> u64 {
        self.0
    }

    /// Returns true if the duration is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Saturating subtraction
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Addition clamped to an upper bound
    pub fn add_clamped(self, other: Self, max: Self) -> Self {
        Self((self.0 + other.0).min(max.0))
    }

    /// Formats as zero-padded HH:MM:SS, rolling over at the minute and
    /// hour boundaries
    pub fn as_hms(&self) -> String {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hms())
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Self(d.as_secs())
    }
}

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_seconds() {
        let d = Duration::from_seconds(3665);
        assert_eq!(d.as_seconds(), 3665);
    }

    #[test]
    fn test_duration_is_zero() {
        assert!(Duration::ZERO.is_zero());
        assert!(!Duration::from_seconds(100).is_zero());
    }

    #[test]
    fn test_duration_as_hms_zero() {
        assert_eq!(Duration::ZERO.as_hms(), "00:00:00");
    }

    #[test]
    fn test_duration_as_hms_minute_rollover() {
        assert_eq!(Duration::from_seconds(65).as_hms(), "00:01:05");
    }

    #[test]
    fn test_duration_as_hms_hour_rollover() {
        assert_eq!(Duration::from_seconds(3661).as_hms(), "01:01:01");
    }

    #[test]
    fn test_duration_as_hms_large() {
        let d = Duration::from_seconds(25 * 3600 + 90); // 25h 1m 30s
        assert_eq!(d.as_hms(), "25:01:30");
    }

    #[test]
    fn test_duration_display() {
        let d = Duration::from_seconds(3665);
        assert_eq!(d.to_string(), "01:01:05");
    }

    #[test]
    fn test_duration_saturating_sub() {
        let d = Duration::from_seconds(5);
        assert_eq!(d.saturating_sub(Duration::from_seconds(10)), Duration::ZERO);
        assert_eq!(
            Duration::from_seconds(10).saturating_sub(d),
            Duration::from_seconds(5)
        );
    }

    #[test]
    fn test_duration_add_clamped() {
        let max = Duration::from_seconds(100);
        let d = Duration::from_seconds(95).add_clamped(Duration::from_seconds(10), max);
        assert_eq!(d, max);

        let d = Duration::from_seconds(50).add_clamped(Duration::from_seconds(10), max);
        assert_eq!(d, Duration::from_seconds(60));
    }

    #[test]
    fn test_duration_ordering() {
        assert!(Duration::from_seconds(100) < Duration::from_seconds(200));
    }

    #[test]
    fn test_duration_from_std_duration() {
        let d: Duration = std::time::Duration::from_secs(42).into();
        assert_eq!(d.as_seconds(), 42);
    }

    #[test]
    fn test_validator_trait() {
        struct TestType {
            value: i32,
        }

        impl Validator for TestType {
            fn validate(&self) -> Result<(), Vec<String>> {
                if self.value < 0 {
                    Err(vec!["Value must be positive".to_string()])
                } else {
                    Ok(())
                }
            }
        }

        assert!(TestType { value: 10 }.is_valid());
        assert!(!TestType { value: -5 }.is_valid());
    }
}
