//! Episode source trait and query types

use crate::SourceResult;
use podstream_core::{Episode, EpisodeId};

/// A provider of episode records
pub trait EpisodeSource: Send + Sync {
    /// Lists episodes according to the query
    fn list_episodes(&self, query: &ListQuery) -> SourceResult<Vec<Episode>>;

    /// Fetches a single episode by id
    fn get_episode(&self, id: &EpisodeId) -> SourceResult<Episode>;

    /// Check if the source is available
    fn is_available(&self) -> bool;
}

/// Sort direction for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Wire form of the order ("asc"/"desc")
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Listing query
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub sort: Option<String>,
    pub order: SortOrder,
}

impl ListQuery {
    pub fn new() -> Self {
        Self {
            limit: None,
            sort: None,
            order: SortOrder::Descending,
        }
    }

    /// The home-page query: newest episodes first
    pub fn latest(limit: usize) -> Self {
        Self::new().with_limit(limit).with_sort("published_at")
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod trait_tests {
    use super::*;

    #[test]
    fn test_list_query_builder() {
        let query = ListQuery::new()
            .with_limit(12)
            .with_sort("published_at")
            .with_order(SortOrder::Ascending);

        assert_eq!(query.limit, Some(12));
        assert_eq!(query.sort.as_deref(), Some("published_at"));
        assert_eq!(query.order, SortOrder::Ascending);
    }

    #[test]
    fn test_list_query_default() {
        let query = ListQuery::default();
        assert_eq!(query.limit, None);
        assert_eq!(query.sort, None);
        assert_eq!(query.order, SortOrder::Descending);
    }

    #[test]
    fn test_latest_query() {
        let query = ListQuery::latest(12);
        assert_eq!(query.limit, Some(12));
        assert_eq!(query.sort.as_deref(), Some("published_at"));
        assert_eq!(query.order, SortOrder::Descending);
    }

    #[test]
    fn test_sort_order_params() {
        assert_eq!(SortOrder::Ascending.as_param(), "asc");
        assert_eq!(SortOrder::Descending.as_param(), "desc");
    }
}
