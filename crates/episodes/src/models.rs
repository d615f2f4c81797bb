//! Wire models for the podcast feed server API

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use podstream_core::{Duration, Episode, EpisodeId};
use serde::Deserialize;

/// One episode record as the server sends it
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub description: String,
    pub file: ApiFile,
    pub published_at: String,
}

/// Media file descriptor nested in an episode record
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    /// Duration in seconds
    pub duration: u64,
}

impl ApiEpisode {
    /// Maps the wire record into the domain entity
    ///
    /// Display formatting of the publication date happens here so the
    /// core never deals with raw timestamps.
    pub fn into_episode(self) -> Episode {
        let published_at = format_published_at(&self.published_at);
        Episode {
            id: EpisodeId::new(self.id),
            title: self.title,
            members: self.members,
            description: self.description,
            thumbnail: self.thumbnail,
            url: self.file.url,
            duration: Duration::from_seconds(self.file.duration),
            published_at,
        }
    }
}

/// Formats a server timestamp as "8 Jan 21"
///
/// The server has sent both `YYYY-MM-DD HH:MM:SS` and ISO-8601 over time;
/// an unparseable value is displayed as-is rather than dropped.
fn format_published_at(raw: &str) -> String {
    const DISPLAY: &str = "%-d %b %y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(DISPLAY).to_string();
    }

    log::warn!("Unrecognized published_at format: {:?}", raw);
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPISODE_JSON: &str = r#"{
        "id": "a-new-hope",
        "title": "A New Hope",
        "members": "Diego and Richard",
        "published_at": "2021-01-08 12:00:00",
        "thumbnail": "https://example.com/a-new-hope.jpg",
        "description": "<p>Episode notes</p>",
        "file": {
            "url": "https://example.com/a-new-hope.mp3",
            "type": "audio/mpeg",
            "duration": 3065
        }
    }"#;

    #[test]
    fn test_deserialize_episode_record() {
        let api: ApiEpisode = serde_json::from_str(EPISODE_JSON).unwrap();
        assert_eq!(api.id, "a-new-hope");
        assert_eq!(api.file.duration, 3065);
        assert_eq!(api.file.mime_type, "audio/mpeg");
    }

    #[test]
    fn test_into_episode_maps_fields() {
        let api: ApiEpisode = serde_json::from_str(EPISODE_JSON).unwrap();
        let episode = api.into_episode();

        assert_eq!(episode.id, EpisodeId::new("a-new-hope"));
        assert_eq!(episode.title, "A New Hope");
        assert_eq!(episode.members, "Diego and Richard");
        assert_eq!(episode.url, "https://example.com/a-new-hope.mp3");
        assert_eq!(episode.duration.as_seconds(), 3065);
        assert_eq!(episode.published_at, "8 Jan 21");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": "e2",
            "title": "Bare",
            "published_at": "2021-02-01 08:00:00",
            "file": { "url": "https://example.com/e2.mp3", "duration": 60 }
        }"#;

        let api: ApiEpisode = serde_json::from_str(json).unwrap();
        assert!(api.members.is_empty());
        assert!(api.thumbnail.is_empty());
        assert!(api.description.is_empty());
    }

    #[test]
    fn test_format_published_at_datetime() {
        assert_eq!(format_published_at("2021-01-08 12:00:00"), "8 Jan 21");
    }

    #[test]
    fn test_format_published_at_rfc3339() {
        assert_eq!(format_published_at("2021-01-08T12:00:00+00:00"), "8 Jan 21");
    }

    #[test]
    fn test_format_published_at_date_only() {
        assert_eq!(format_published_at("2021-11-20"), "20 Nov 21");
    }

    #[test]
    fn test_format_published_at_unparseable_passthrough() {
        assert_eq!(format_published_at("last Tuesday"), "last Tuesday");
    }
}
