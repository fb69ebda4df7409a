use chrono::{DateTime, Utc};

auto_derived!(
    /// Category tag classifying an event
    #[derive(Copy, Hash)]
    pub enum Category {
        #[serde(rename = "JEE")]
        Jee,
        #[serde(rename = "NEET")]
        Neet,
        #[serde(rename = "EAPCET")]
        Eapcet,
        #[serde(rename = "BITSAT")]
        Bitsat,
        #[serde(rename = "VITEEE")]
        Viteee,
        #[serde(rename = "COMEDK")]
        Comedk,
        #[serde(rename = "GATE")]
        Gate,
        #[serde(rename = "CAT")]
        Cat,
        #[serde(rename = "GRE")]
        Gre,
        #[serde(rename = "UPSC")]
        Upsc,
        Hackathons,
        Workshops,
        Webinars,
        Internships,
        Scholarships,
        Competitions,
        #[serde(rename = "College Fests")]
        CollegeFests,
        Sports,
        Cultural,
        #[serde(rename = "Coding Contests")]
        CodingContests,
        Robotics,
        #[serde(rename = "Science Fairs")]
        ScienceFairs,
        #[serde(rename = "Career Guidance")]
        CareerGuidance,
        Counselling,
        #[serde(rename = "Study Groups")]
        StudyGroups,
    }
);

/// Display style attached to a category
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CategoryStyle {
    /// Human readable label
    pub label: &'static str,
    /// Accent colour (hex)
    pub accent: &'static str,
    /// Icon name understood by the client
    pub icon: &'static str,
}

impl Category {
    /// Every known category, in onboarding display order
    pub const ALL: [Category; 25] = [
        Category::Jee,
        Category::Neet,
        Category::Eapcet,
        Category::Bitsat,
        Category::Viteee,
        Category::Comedk,
        Category::Gate,
        Category::Cat,
        Category::Gre,
        Category::Upsc,
        Category::Hackathons,
        Category::Workshops,
        Category::Webinars,
        Category::Internships,
        Category::Scholarships,
        Category::Competitions,
        Category::CollegeFests,
        Category::Sports,
        Category::Cultural,
        Category::CodingContests,
        Category::Robotics,
        Category::ScienceFairs,
        Category::CareerGuidance,
        Category::Counselling,
        Category::StudyGroups,
    ];

    /// Display style for this category
    ///
    /// Exhaustive on purpose: adding a category without a style is a
    /// compile error, not a silent fallback.
    pub fn style(&self) -> CategoryStyle {
        match self {
            Category::Jee => CategoryStyle {
                label: "JEE",
                accent: "#e63946",
                icon: "calculator",
            },
            Category::Neet => CategoryStyle {
                label: "NEET",
                accent: "#2a9d8f",
                icon: "stethoscope",
            },
            Category::Eapcet => CategoryStyle {
                label: "EAPCET",
                accent: "#457b9d",
                icon: "school",
            },
            Category::Bitsat => CategoryStyle {
                label: "BITSAT",
                accent: "#e76f51",
                icon: "school",
            },
            Category::Viteee => CategoryStyle {
                label: "VITEEE",
                accent: "#8338ec",
                icon: "school",
            },
            Category::Comedk => CategoryStyle {
                label: "COMEDK",
                accent: "#ff006e",
                icon: "school",
            },
            Category::Gate => CategoryStyle {
                label: "GATE",
                accent: "#3a86ff",
                icon: "cog",
            },
            Category::Cat => CategoryStyle {
                label: "CAT",
                accent: "#fb8500",
                icon: "briefcase",
            },
            Category::Gre => CategoryStyle {
                label: "GRE",
                accent: "#06d6a0",
                icon: "airplane",
            },
            Category::Upsc => CategoryStyle {
                label: "UPSC",
                accent: "#073b4c",
                icon: "landmark",
            },
            Category::Hackathons => CategoryStyle {
                label: "Hackathons",
                accent: "#7209b7",
                icon: "code",
            },
            Category::Workshops => CategoryStyle {
                label: "Workshops",
                accent: "#f4a261",
                icon: "wrench",
            },
            Category::Webinars => CategoryStyle {
                label: "Webinars",
                accent: "#219ebc",
                icon: "video",
            },
            Category::Internships => CategoryStyle {
                label: "Internships",
                accent: "#264653",
                icon: "briefcase",
            },
            Category::Scholarships => CategoryStyle {
                label: "Scholarships",
                accent: "#ffb703",
                icon: "award",
            },
            Category::Competitions => CategoryStyle {
                label: "Competitions",
                accent: "#d62828",
                icon: "trophy",
            },
            Category::CollegeFests => CategoryStyle {
                label: "College Fests",
                accent: "#f72585",
                icon: "music",
            },
            Category::Sports => CategoryStyle {
                label: "Sports",
                accent: "#38b000",
                icon: "dumbbell",
            },
            Category::Cultural => CategoryStyle {
                label: "Cultural",
                accent: "#9d4edd",
                icon: "palette",
            },
            Category::CodingContests => CategoryStyle {
                label: "Coding Contests",
                accent: "#4361ee",
                icon: "terminal",
            },
            Category::Robotics => CategoryStyle {
                label: "Robotics",
                accent: "#6c757d",
                icon: "robot",
            },
            Category::ScienceFairs => CategoryStyle {
                label: "Science Fairs",
                accent: "#00b4d8",
                icon: "flask",
            },
            Category::CareerGuidance => CategoryStyle {
                label: "Career Guidance",
                accent: "#588157",
                icon: "compass",
            },
            Category::Counselling => CategoryStyle {
                label: "Counselling",
                accent: "#ef476f",
                icon: "heart",
            },
            Category::StudyGroups => CategoryStyle {
                label: "Study Groups",
                accent: "#118ab2",
                icon: "users",
            },
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.style().label)
    }
}

impl std::str::FromStr for Category {
    type Err = campusfeed_result::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.style().label == s)
            .ok_or_else(|| {
                create_error!(InvalidCategory {
                    value: s.to_string()
                })
            })
    }
}

auto_derived!(
    /// Event
    pub struct Event {
        /// Event Id
        #[serde(rename = "_id")]
        pub id: String,

        /// Event title
        pub title: String,

        /// Event description
        pub description: String,

        /// Organisation hosting the event
        pub organization: String,

        /// Category this event is filed under
        pub category: Category,

        /// Date as entered by the submitter (free text, not parsed)
        pub date: String,

        /// Location as entered by the submitter (free text)
        pub location: String,

        /// Link with further details
        #[serde(skip_serializing_if = "Option::is_none")]
        pub link: Option<String>,

        /// Promotional image URL
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,

        /// Creation timestamp. Stored documents carry this in several
        /// legacy shapes, so decoding goes through the lenient
        /// normaliser.
        #[serde(deserialize_with = "crate::util::timestamps::lenient_datetime")]
        pub created_at: DateTime<Utc>,

        /// Id of the submitting user
        #[serde(skip_serializing_if = "Option::is_none")]
        pub user_id: Option<String>,

        /// Whether the event takes place online, derived from the
        /// location text at creation time
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub is_online: bool,
    }
);

/// Markers that classify a free-text location as online
const ONLINE_MARKERS: [&str; 6] = ["online", "virtual", "remote", "webinar", "zoom", "meet"];

impl Event {
    /// Decide whether a free-text location describes an online event
    pub fn is_online_location(location: &str) -> bool {
        let location = location.to_lowercase();
        ONLINE_MARKERS
            .iter()
            .any(|marker| location.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use crate::{Category, Event, CATEGORY_FILTER_LIMIT};

    fn event(id: &str, title: &str, category: Category, minute: i64) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: "An event".to_string(),
            organization: "Campusfeed".to_string(),
            category,
            date: "12 Sep 2026".to_string(),
            location: "Hyderabad".to_string(),
            link: None,
            image: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap()
                + Duration::minutes(minute),
            user_id: None,
            is_online: false,
        }
    }

    #[test]
    fn derive_is_online_from_location() {
        assert!(Event::is_online_location("Online (Zoom)"));
        assert!(Event::is_online_location("Virtual - Google Meet"));
        assert!(Event::is_online_location("REMOTE"));
        assert!(!Event::is_online_location("Hyderabad Convention Centre"));
    }

    #[test]
    fn category_serializes_to_fixed_strings() {
        assert_eq!(
            serde_json::to_string(&Category::Jee).unwrap(),
            "\"JEE\""
        );
        assert_eq!(
            serde_json::to_string(&Category::CollegeFests).unwrap(),
            "\"College Fests\""
        );

        assert_eq!(
            serde_json::from_str::<Category>("\"NEET\"").unwrap(),
            Category::Neet
        );
        assert!(serde_json::from_str::<Category>("\"Quiz Night\"").is_err());
    }

    #[test]
    fn legacy_created_at_shapes_still_decode() {
        let expected = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();

        for created_at in [
            serde_json::json!("2026-08-01T10:00:00Z"),
            serde_json::json!(expected.timestamp()),
            serde_json::json!(expected.timestamp_millis()),
            serde_json::json!({ "seconds": expected.timestamp(), "nanoseconds": 0 }),
        ] {
            let document = serde_json::json!({
                "_id": "0001AAAA",
                "title": "JEE mock test",
                "description": "An event",
                "organization": "Campusfeed",
                "category": "JEE",
                "date": "12 Sep 2026",
                "location": "Hyderabad",
                "created_at": created_at,
            });

            let event: Event = serde_json::from_value(document).unwrap();
            assert_eq!(event.created_at, expected);
        }
    }

    #[test]
    fn category_round_trips_through_display() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            db.insert_event(&event("0001AAAA", "JEE mock test", Category::Jee, 0))
                .await
                .unwrap();
            db.insert_event(&event("0002AAAA", "NEET crash course", Category::Neet, 1))
                .await
                .unwrap();
            db.insert_event(&event(
                "0003AAAA",
                "Soldering workshop",
                Category::Workshops,
                2,
            ))
            .await
            .unwrap();

            let fetched = db.fetch_event("0002AAAA").await.unwrap();
            assert_eq!(fetched.title, "NEET crash course");

            assert!(db.fetch_event("0009AAAA").await.is_err());

            let all = db.fetch_all_events().await.unwrap();
            assert_eq!(all.len(), 3);
            assert_eq!(all[0].title, "Soldering workshop");
            assert!(all
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at));

            let jee = db.fetch_events_by_category(Category::Jee).await.unwrap();
            assert_eq!(jee.len(), 1);
            assert_eq!(jee[0].title, "JEE mock test");
        });
    }

    #[async_std::test]
    async fn newest_event_is_first() {
        database_test!(|db| async move {
            for minute in 0..4 {
                db.insert_event(&event(
                    &format!("000{minute}BBBB"),
                    &format!("Event {minute}"),
                    Category::Hackathons,
                    minute,
                ))
                .await
                .unwrap();
            }

            db.insert_event(&event("0009BBBB", "Newest", Category::Hackathons, 10))
                .await
                .unwrap();

            let all = db.fetch_all_events().await.unwrap();
            assert_eq!(all[0].title, "Newest");
        });
    }

    #[async_std::test]
    async fn recommendations_follow_preferences() {
        database_test!(|db| async move {
            db.insert_event(&event("0001CCCC", "JEE mock test", Category::Jee, 0))
                .await
                .unwrap();
            db.insert_event(&event("0002CCCC", "NEET crash course", Category::Neet, 1))
                .await
                .unwrap();
            db.insert_event(&event(
                "0003CCCC",
                "Soldering workshop",
                Category::Workshops,
                2,
            ))
            .await
            .unwrap();

            let recommended = db
                .fetch_recommended_events(&[Category::Jee, Category::Neet])
                .await
                .unwrap();
            assert_eq!(recommended.len(), 2);
            assert!(recommended
                .iter()
                .all(|event| [Category::Jee, Category::Neet].contains(&event.category)));

            let none = db.fetch_recommended_events(&[]).await.unwrap();
            assert!(none.is_empty());
        });
    }

    #[async_std::test]
    async fn recommendations_are_capped_at_ten_categories() {
        database_test!(|db| async move {
            // The 11th preference never matches anything.
            let preferences: Vec<Category> = Category::ALL
                .into_iter()
                .take(CATEGORY_FILTER_LIMIT + 1)
                .collect();
            let eleventh = preferences[CATEGORY_FILTER_LIMIT];

            db.insert_event(&event("0001DDDD", "In range", preferences[0], 0))
                .await
                .unwrap();
            db.insert_event(&event("0002DDDD", "Out of range", eleventh, 1))
                .await
                .unwrap();

            let recommended = db.fetch_recommended_events(&preferences).await.unwrap();
            assert_eq!(recommended.len(), 1);
            assert_eq!(recommended[0].title, "In range");
            assert!(recommended
                .iter()
                .all(|event| preferences[..CATEGORY_FILTER_LIMIT].contains(&event.category)));
        });
    }
}
