use campusfeed_database::{Database, UserProfile};
use campusfeed_preferences::PreferenceStore;
use campusfeed_result::Result;

use crate::{reduce, FeedAction, FeedEffect, FeedState};

/// Drives the feed state machine against real storage
///
/// Effects run sequentially and each query is attempted exactly once;
/// failures are logged and folded into [`FeedAction::LoadFailed`], leaving
/// the list empty or stale. Preference writes propagate their errors.
pub struct FeedController {
    db: Database,
    store: PreferenceStore,
    pub state: FeedState,
    /// Profile of the signed-in user, if one was resolved at init
    pub profile: Option<UserProfile>,
}

impl FeedController {
    pub fn new(db: Database, store: PreferenceStore) -> Self {
        FeedController {
            db,
            store,
            state: FeedState::default(),
            profile: None,
        }
    }

    /// Initial load: preferences and the user's profile are fetched
    /// concurrently, then the reducer decides between onboarding and
    /// the personalised feed
    pub async fn init(&mut self, user_id: Option<&str>) -> Result<()> {
        let (preferences, profile) = futures::join!(
            self.store.get_user_event_preferences(),
            fetch_profile(&self.db, user_id)
        );

        self.profile = profile;
        self.dispatch(FeedAction::PreferencesLoaded { preferences })
            .await
    }

    /// Apply an action and run any effects it produces
    pub async fn dispatch(&mut self, action: FeedAction) -> Result<()> {
        let effects = reduce(&mut self.state, action);

        for effect in effects {
            match effect {
                FeedEffect::QueryAll { generation } => {
                    match self.db.fetch_all_events().await {
                        Ok(events) => {
                            reduce(
                                &mut self.state,
                                FeedAction::EventsLoaded {
                                    events,
                                    recommended: None,
                                },
                            );
                        }
                        Err(error) => {
                            tracing::warn!("Event query {generation} failed: {error:?}");
                            reduce(&mut self.state, FeedAction::LoadFailed);
                        }
                    }
                }
                FeedEffect::QueryRecommended {
                    generation,
                    preferences,
                } => {
                    match self.db.fetch_recommended_events(&preferences).await {
                        Ok(events) => {
                            reduce(
                                &mut self.state,
                                FeedAction::EventsLoaded {
                                    recommended: Some(events.clone()),
                                    events,
                                },
                            );
                        }
                        Err(error) => {
                            tracing::warn!(
                                "Recommendation query {generation} failed: {error:?}"
                            );
                            reduce(&mut self.state, FeedAction::LoadFailed);
                        }
                    }
                }
                FeedEffect::PersistPreferences(preferences) => {
                    self.store
                        .update_user_event_preferences(&preferences)
                        .await?;
                }
            }
        }

        Ok(())
    }
}

async fn fetch_profile(db: &Database, user_id: Option<&str>) -> Option<UserProfile> {
    let user_id = user_id?;
    match db.fetch_user_profile(user_id).await {
        Ok(profile) => Some(profile),
        Err(error) => {
            tracing::warn!("Profile fetch failed: {error:?}");
            None
        }
    }
}
