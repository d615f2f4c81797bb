//! Episode sources for PodStream
//!
//! An [`EpisodeSource`] supplies the ordered episode records everything
//! else renders and queues. The only production implementation is
//! [`RestEpisodeSource`], a thin client over the podcast feed server's
//! REST API; the trait exists so presentation code and tests can swap in
//! canned sources.

mod error;
mod models;
mod rest;
mod traits;

pub use error::{SourceError, SourceResult};
pub use models::{ApiEpisode, ApiFile};
pub use rest::RestEpisodeSource;
pub use traits::{EpisodeSource, ListQuery, SortOrder};
