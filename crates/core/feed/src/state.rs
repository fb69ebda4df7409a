use campusfeed_database::{Category, Event};

/// Which base set the main list is fed from
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ViewMode {
    /// Events matching the user's stored preferences
    MyFeed,
    /// Every event
    Explore,
}

/// Client-side narrowing applied on top of an already-fetched list
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubFilter {
    All,
    Category(Category),
}

/// Lifecycle of the feed screen
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FeedStatus {
    /// Initial load has not resolved yet
    Loading,
    /// No stored preferences; category selection is forced open
    Onboarding,
    /// Normal operation in the given view mode
    Ready(ViewMode),
}

/// Queries and writes the reducer asks the controller to perform
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FeedEffect {
    /// Fetch every event
    QueryAll { generation: u64 },
    /// Fetch events matching the given preferences
    QueryRecommended {
        generation: u64,
        preferences: Vec<Category>,
    },
    /// Persist the given preferences to durable storage
    PersistPreferences(Vec<Category>),
}

/// Everything the reducer can react to
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FeedAction {
    /// Stored preferences finished loading
    PreferencesLoaded { preferences: Vec<Category> },
    /// A query resolved; `recommended` also refreshes the carousel when set
    EventsLoaded {
        events: Vec<Event>,
        recommended: Option<Vec<Event>>,
    },
    /// A query failed; the list is left as it was
    LoadFailed,
    /// User toggled between "For You" and "Explore"
    SwitchMode(ViewMode),
    /// User picked a sub-filter chip
    SetSubFilter(SubFilter),
    /// User saved an edited preference set
    SavePreferences(Vec<Category>),
    /// Pull-to-refresh
    Refresh,
}

/// Complete state of the feed screen
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FeedState {
    pub status: FeedStatus,
    /// Orthogonal to `status`; set while a refresh is in flight
    pub refreshing: bool,
    pub preferences: Vec<Category>,
    pub sub_filter: SubFilter,
    /// Main list, from whichever base set the view mode selects
    pub events: Vec<Event>,
    /// Horizontal "recommended" carousel
    pub recommended: Vec<Event>,
    /// Monotonic label for outgoing queries. Responses are not cancelled
    /// or reordered; whichever lands last wins.
    pub generation: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        FeedState {
            status: FeedStatus::Loading,
            refreshing: false,
            preferences: vec![],
            sub_filter: SubFilter::All,
            events: vec![],
            recommended: vec![],
            generation: 0,
        }
    }
}

impl FeedState {
    /// Effective view mode; onboarding browses everything
    pub fn view_mode(&self) -> ViewMode {
        match self.status {
            FeedStatus::Ready(mode) => mode,
            FeedStatus::Loading | FeedStatus::Onboarding => ViewMode::Explore,
        }
    }

    /// Whether the category selection modal is forced open
    pub fn onboarding_open(&self) -> bool {
        matches!(self.status, FeedStatus::Onboarding)
    }

    /// The main list with the active sub-filter applied
    pub fn visible_events(&self) -> Vec<&Event> {
        match self.sub_filter {
            SubFilter::All => self.events.iter().collect(),
            SubFilter::Category(category) => self
                .events
                .iter()
                .filter(|event| event.category == category)
                .collect(),
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn query_for_mode(&mut self, mode: ViewMode) -> FeedEffect {
        let generation = self.next_generation();
        match mode {
            ViewMode::Explore => FeedEffect::QueryAll { generation },
            ViewMode::MyFeed => FeedEffect::QueryRecommended {
                generation,
                preferences: self.preferences.clone(),
            },
        }
    }
}

/// Pure transition function for the feed screen
pub fn reduce(state: &mut FeedState, action: FeedAction) -> Vec<FeedEffect> {
    match action {
        FeedAction::PreferencesLoaded { preferences } => {
            state.preferences = preferences;

            if state.preferences.is_empty() {
                state.status = FeedStatus::Onboarding;
                vec![state.query_for_mode(ViewMode::Explore)]
            } else {
                state.status = FeedStatus::Ready(ViewMode::MyFeed);
                vec![state.query_for_mode(ViewMode::MyFeed)]
            }
        }
        FeedAction::EventsLoaded {
            events,
            recommended,
        } => {
            state.events = events;
            if let Some(recommended) = recommended {
                state.recommended = recommended;
            }
            state.refreshing = false;
            vec![]
        }
        FeedAction::LoadFailed => {
            state.refreshing = false;
            vec![]
        }
        FeedAction::SwitchMode(mode) => {
            state.status = FeedStatus::Ready(mode);
            state.sub_filter = SubFilter::All;
            vec![state.query_for_mode(mode)]
        }
        FeedAction::SetSubFilter(sub_filter) => {
            state.sub_filter = sub_filter;
            vec![]
        }
        FeedAction::SavePreferences(preferences) => {
            state.preferences = preferences.clone();
            state.status = FeedStatus::Ready(ViewMode::MyFeed);
            state.sub_filter = SubFilter::All;

            let mut effects = vec![FeedEffect::PersistPreferences(preferences)];
            if !state.preferences.is_empty() {
                effects.push(state.query_for_mode(ViewMode::MyFeed));
            }
            effects
        }
        FeedAction::Refresh => {
            state.refreshing = true;
            vec![state.query_for_mode(state.view_mode())]
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use campusfeed_database::{Category, Event};

    use super::*;

    fn event(id: &str, category: Category) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: "An event".to_string(),
            organization: "Campusfeed".to_string(),
            category,
            date: "12 Sep 2026".to_string(),
            location: "Hyderabad".to_string(),
            link: None,
            image: None,
            created_at: Utc::now(),
            user_id: None,
            is_online: false,
        }
    }

    #[test]
    fn empty_preferences_force_onboarding_in_explore_mode() {
        let mut state = FeedState::default();
        let effects = reduce(
            &mut state,
            FeedAction::PreferencesLoaded { preferences: vec![] },
        );

        assert!(state.onboarding_open());
        assert_eq!(state.view_mode(), ViewMode::Explore);
        assert!(matches!(effects[..], [FeedEffect::QueryAll { .. }]));
    }

    #[test]
    fn stored_preferences_open_my_feed() {
        let mut state = FeedState::default();
        let effects = reduce(
            &mut state,
            FeedAction::PreferencesLoaded {
                preferences: vec![Category::Jee, Category::Neet],
            },
        );

        assert!(!state.onboarding_open());
        assert_eq!(state.status, FeedStatus::Ready(ViewMode::MyFeed));
        assert_eq!(
            effects,
            vec![FeedEffect::QueryRecommended {
                generation: 1,
                preferences: vec![Category::Jee, Category::Neet],
            }]
        );
    }

    #[test]
    fn sub_filter_narrows_client_side() {
        let mut state = FeedState::default();
        reduce(
            &mut state,
            FeedAction::EventsLoaded {
                events: vec![
                    event("0001", Category::Jee),
                    event("0002", Category::Neet),
                    event("0003", Category::Jee),
                ],
                recommended: None,
            },
        );

        assert_eq!(state.visible_events().len(), 3);

        reduce(
            &mut state,
            FeedAction::SetSubFilter(SubFilter::Category(Category::Jee)),
        );
        let visible = state.visible_events();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|event| event.category == Category::Jee));
    }

    #[test]
    fn mode_switch_resets_sub_filter_and_requeries() {
        let mut state = FeedState::default();
        reduce(
            &mut state,
            FeedAction::PreferencesLoaded {
                preferences: vec![Category::Jee],
            },
        );
        reduce(
            &mut state,
            FeedAction::SetSubFilter(SubFilter::Category(Category::Jee)),
        );

        let effects = reduce(&mut state, FeedAction::SwitchMode(ViewMode::Explore));

        assert_eq!(state.sub_filter, SubFilter::All);
        assert_eq!(state.status, FeedStatus::Ready(ViewMode::Explore));
        assert!(matches!(effects[..], [FeedEffect::QueryAll { .. }]));
    }

    #[test]
    fn saving_preferences_persists_then_requeries() {
        let mut state = FeedState::default();
        reduce(
            &mut state,
            FeedAction::PreferencesLoaded { preferences: vec![] },
        );

        let effects = reduce(
            &mut state,
            FeedAction::SavePreferences(vec![Category::Hackathons]),
        );

        assert_eq!(state.status, FeedStatus::Ready(ViewMode::MyFeed));
        assert!(matches!(
            effects[..],
            [
                FeedEffect::PersistPreferences(_),
                FeedEffect::QueryRecommended { .. }
            ]
        ));
    }

    #[test]
    fn saving_empty_preferences_skips_the_query() {
        let mut state = FeedState::default();
        let effects = reduce(&mut state, FeedAction::SavePreferences(vec![]));

        assert_eq!(effects, vec![FeedEffect::PersistPreferences(vec![])]);
    }

    #[test]
    fn refresh_keeps_the_current_mode() {
        let mut state = FeedState::default();
        reduce(
            &mut state,
            FeedAction::PreferencesLoaded {
                preferences: vec![Category::Jee],
            },
        );

        let effects = reduce(&mut state, FeedAction::Refresh);
        assert!(state.refreshing);
        assert!(matches!(
            effects[..],
            [FeedEffect::QueryRecommended { .. }]
        ));

        reduce(
            &mut state,
            FeedAction::EventsLoaded {
                events: vec![],
                recommended: None,
            },
        );
        assert!(!state.refreshing);
    }

    #[test]
    fn later_responses_overwrite_earlier_ones() {
        // No cancellation: whichever response lands last wins.
        let mut state = FeedState::default();
        reduce(
            &mut state,
            FeedAction::EventsLoaded {
                events: vec![event("0001", Category::Jee)],
                recommended: None,
            },
        );
        reduce(
            &mut state,
            FeedAction::EventsLoaded {
                events: vec![event("0002", Category::Neet)],
                recommended: None,
            },
        );

        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].id, "0002");
    }

    #[test]
    fn query_generations_are_monotonic() {
        let mut state = FeedState::default();
        reduce(
            &mut state,
            FeedAction::PreferencesLoaded { preferences: vec![] },
        );
        reduce(&mut state, FeedAction::Refresh);
        let effects = reduce(&mut state, FeedAction::Refresh);

        assert_eq!(effects, vec![FeedEffect::QueryAll { generation: 3 }]);
    }
}
