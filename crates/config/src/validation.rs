//! Validation system for configuration values

pub use crate::error::ValidationError;

/// Trait for configuration sections that can validate themselves
///
/// Each config section (ServerConfig, PlayerConfig, ...) implements this
/// trait; the root config aggregates their results, so sections can be
/// added without touching existing code.
pub trait ConfigSection: Default {
    /// Validates the configuration section
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Merges another config section into this one
    ///
    /// Values from `other` take precedence (defaults < file < CLI args).
    fn merge(&mut self, other: Self);

    /// Returns the section name for error reporting
    fn section_name(&self) -> &'static str;
}

/// Common validators for config values
pub struct Validator;

impl Validator {
    /// Validates that a numeric value is within a range
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            Err(ValidationError::with_value(
                field,
                format!("must be between {} and {}", min, max),
                value,
            ))
        } else {
            Ok(())
        }
    }

    /// Validates that a string is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Validates that a string looks like an HTTP(S) URL
    pub fn is_http_url(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(ValidationError::with_value(
                field,
                "must start with http:// or https://",
                value,
            ))
        }
    }

    /// Collects individual check results into a section-level result
    pub fn collect_errors(
        checks: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_accepts_bounds() {
        assert!(Validator::in_range(1, 1, 10, "f").is_ok());
        assert!(Validator::in_range(10, 1, 10, "f").is_ok());
    }

    #[test]
    fn test_in_range_rejects_outside() {
        assert!(Validator::in_range(0, 1, 10, "f").is_err());
        assert!(Validator::in_range(11, 1, 10, "f").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(Validator::not_empty("value", "f").is_ok());
        assert!(Validator::not_empty("   ", "f").is_err());
    }

    #[test]
    fn test_is_http_url() {
        assert!(Validator::is_http_url("http://localhost:3333", "f").is_ok());
        assert!(Validator::is_http_url("https://feed.example.com", "f").is_ok());
        assert!(Validator::is_http_url("ftp://feed.example.com", "f").is_err());
    }

    #[test]
    fn test_collect_errors() {
        let result = Validator::collect_errors(vec![
            Validator::in_range(0, 1, 10, "a"),
            Validator::not_empty("ok", "b"),
            Validator::in_range(11, 1, 10, "c"),
        ]);

        assert_eq!(result.unwrap_err().len(), 2);
    }
}
