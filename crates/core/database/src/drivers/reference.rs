use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Event, UserProfile};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub user_profiles: Arc<Mutex<HashMap<String, UserProfile>>>,
    }
);

impl ReferenceDb {
    /// Remove all stored data
    pub async fn clear(&self) {
        self.events.lock().await.clear();
        self.user_profiles.lock().await.clear();
    }
}
