//! Episode domain model

use crate::types::{Duration, Validator};
use serde::{Deserialize, Serialize};

/// Unique identifier for an episode
///
/// Episode ids are assigned by the feed server and treated as opaque
/// strings on this side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Creates an EpisodeId from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One playable podcast episode with its display metadata
///
/// Immutable after creation; the queue holds clones of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub title: String,
    /// Participants line, e.g. "Diego and Richard"
    pub members: String,
    /// Episode notes; may contain HTML from the feed
    pub description: String,
    /// Cover image URL
    pub thumbnail: String,
    /// Media resource URL
    pub url: String,
    pub duration: Duration,
    /// Already formatted for display ("8 Jan 21"); formatting happens
    /// at the source boundary, not here
    pub published_at: String,
}

impl Episode {
    /// Creates a new episode with the required playable fields
    pub fn new(
        id: EpisodeId,
        title: impl Into<String>,
        url: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            members: String::new(),
            description: String::new(),
            thumbnail: String::new(),
            url: url.into(),
            duration,
            published_at: String::new(),
        }
    }

    /// Display form of the duration
    pub fn duration_hms(&self) -> String {
        self.duration.as_hms()
    }
}

impl Validator for Episode {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.id.as_str().trim().is_empty() {
            errors.push("Episode id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.url.trim().is_empty() {
            errors.push("Media URL cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
