use campusfeed_result::Result;

use crate::models::events::{Category, Event};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

/// Maximum number of categories a set-membership query may filter on.
///
/// The backing store caps `$in`-style membership filters at 10 elements;
/// preferences beyond the cap are dropped before querying. Known limit,
/// covered by tests.
pub const CATEGORY_FILTER_LIMIT: usize = 10;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch every event, newest first
    async fn fetch_all_events(&self) -> Result<Vec<Event>>;

    /// Fetch events in one category, newest first
    async fn fetch_events_by_category(&self, category: Category) -> Result<Vec<Event>>;

    /// Fetch events matching any of the first [`CATEGORY_FILTER_LIMIT`]
    /// given categories, newest first
    async fn fetch_recommended_events(&self, preferences: &[Category]) -> Result<Vec<Event>>;

    /// Insert a new event
    async fn insert_event(&self, event: &Event) -> Result<()>;
}
