use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;

use campusfeed_result::Result;

use super::AbstractEvents;
use crate::{Category, Event, MongoDb, CATEGORY_FILTER_LIMIT};

static COL: &str = "events";

/// Sort newest first; ids are ULIDs so lexicographic order is creation order
fn newest_first() -> FindOptions {
    FindOptions::builder()
        .sort(doc! {
            "_id": -1_i32
        })
        .build()
}

#[async_trait]
impl AbstractEvents for MongoDb {
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownEvent))
    }

    async fn fetch_all_events(&self) -> Result<Vec<Event>> {
        query!(self, find_with_options, COL, doc! {}, newest_first())
    }

    async fn fetch_events_by_category(&self, category: Category) -> Result<Vec<Event>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "category": category.to_string()
            },
            newest_first()
        )
    }

    async fn fetch_recommended_events(&self, preferences: &[Category]) -> Result<Vec<Event>> {
        let categories: Vec<String> = preferences
            .iter()
            .take(CATEGORY_FILTER_LIMIT)
            .map(|category| category.to_string())
            .collect();

        if categories.is_empty() {
            return Ok(vec![]);
        }

        Ok(self
            .col::<Event>(COL)
            .find(doc! {
                "category": {
                    "$in": categories
                }
            })
            .with_options(newest_first())
            .await
            .map_err(|_| create_database_error!("find", COL))?
            .filter_map(|s| async {
                if cfg!(debug_assertions) {
                    Some(s.unwrap())
                } else {
                    s.ok()
                }
            })
            .collect()
            .await)
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }
}
