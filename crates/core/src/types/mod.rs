//! Domain types for PodStream
//!
//! - `episode`: the Episode entity and its id
//! - `common`: shared duration/validation utilities

mod common;
mod episode;

// Re-export all public types
pub use common::{Duration, Validator};
pub use episode::{Episode, EpisodeId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let _id: EpisodeId = EpisodeId::new("e1");
        let _d: Duration = Duration::ZERO;
    }

    #[test]
    fn test_duration_formatting() {
        let d = Duration::from_seconds(3665); // 1h 1m 5s
        assert_eq!(d.to_string(), "01:01:05");
    }
}
