//! REST client for the podcast feed server
//!
//! The server is a plain JSON API: `GET /episodes` with `_limit`,
//! `_sort` and `_order` parameters, and `GET /episodes/{id}` for a
//! single record.

use crate::models::ApiEpisode;
use crate::{EpisodeSource, ListQuery, SourceError, SourceResult};
use podstream_core::{Episode, EpisodeId, Validator};
use std::time::Duration as StdDuration;

/// Episode source backed by the podcast feed server's REST API
pub struct RestEpisodeSource {
    base_url: String,
    client: Option<reqwest::blocking::Client>,
}

impl RestEpisodeSource {
    const DEFAULT_BASE: &'static str = "http://localhost:3333";

    /// Create a source for the given server base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(StdDuration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()
            .ok();

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Create a source for a local development server
    pub fn local() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn client(&self) -> SourceResult<&reqwest::blocking::Client> {
        self.client
            .as_ref()
            .ok_or_else(|| SourceError::NetworkError("HTTP client not available".to_string()))
    }

    fn fetch_episodes(&self, query: &ListQuery) -> SourceResult<Vec<ApiEpisode>> {
        let client = self.client()?;
        let url = format!("{}/episodes", self.base_url);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = query.limit {
            params.push(("_limit", limit.to_string()));
        }
        if let Some(sort) = &query.sort {
            params.push(("_sort", sort.clone()));
            params.push(("_order", query.order.as_param().to_string()));
        }

        let response = client
            .get(&url)
            .query(&params)
            .send()
            .map_err(|e| SourceError::NetworkError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus {
                status: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        response
            .json()
            .map_err(|e| SourceError::ParseError(format!("JSON parse error: {}", e)))
    }

    /// Check if the feed server answers at all
    pub fn check_availability(&self) -> bool {
        let client = match &self.client {
            Some(c) => c,
            None => return false,
        };

        let url = format!("{}/episodes", self.base_url);
        client
            .get(&url)
            .query(&[("_limit", "1")])
            .timeout(StdDuration::from_secs(5))
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

impl EpisodeSource for RestEpisodeSource {
    fn list_episodes(&self, query: &ListQuery) -> SourceResult<Vec<Episode>> {
        if let Some(0) = query.limit {
            return Err(SourceError::InvalidQuery("Limit must be non-zero".to_string()));
        }

        let records = self.fetch_episodes(query)?;

        let episodes: Vec<Episode> = records
            .into_iter()
            .map(ApiEpisode::into_episode)
            .filter(|episode| {
                let valid = episode.is_valid();
                if !valid {
                    log::warn!("Skipping malformed episode record {}", episode.id);
                }
                valid
            })
            .collect();

        Ok(episodes)
    }

    fn get_episode(&self, id: &EpisodeId) -> SourceResult<Episode> {
        if id.as_str().trim().is_empty() {
            return Err(SourceError::InvalidQuery("Empty episode id".to_string()));
        }

        let client = self.client()?;
        let url = format!("{}/episodes/{}", self.base_url, id);

        let response = client
            .get(&url)
            .send()
            .map_err(|e| SourceError::NetworkError(format!("Request failed: {}", e)))?;

        if response.status().as_u16() == 404 {
            return Err(SourceError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus {
                status: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        let record: ApiEpisode = response
            .json()
            .map_err(|e| SourceError::ParseError(format!("JSON parse error: {}", e)))?;

        Ok(record.into_episode())
    }

    fn is_available(&self) -> bool {
        self.client.is_some()
    }
}
