use campusfeed_result::Result;

use super::AbstractEvents;
use crate::{Category, Event, ReferenceDb, CATEGORY_FILTER_LIMIT};

/// Sort a snapshot of events newest first
fn newest_first(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| b.id.cmp(&a.id));
    events
}

#[async_trait]
impl AbstractEvents for ReferenceDb {
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    async fn fetch_all_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(newest_first(events.values().cloned().collect()))
    }

    async fn fetch_events_by_category(&self, category: Category) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(newest_first(
            events
                .values()
                .filter(|event| event.category == category)
                .cloned()
                .collect(),
        ))
    }

    async fn fetch_recommended_events(&self, preferences: &[Category]) -> Result<Vec<Event>> {
        let categories = &preferences[..preferences.len().min(CATEGORY_FILTER_LIMIT)];

        let events = self.events.lock().await;
        Ok(newest_first(
            events
                .values()
                .filter(|event| categories.contains(&event.category))
                .cloned()
                .collect(),
        ))
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        events.insert(event.id.to_string(), event.clone());
        Ok(())
    }
}
