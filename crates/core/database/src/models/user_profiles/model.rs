use std::collections::HashMap;

auto_derived!(
    /// Education details on a profile
    pub struct Education {
        /// Institution name
        pub institution: String,
        /// Degree or class
        pub degree: String,
        /// Expected graduation year
        #[serde(skip_serializing_if = "Option::is_none")]
        pub graduation_year: Option<i32>,
    }

    /// Denormalised user profile, one document per user
    pub struct UserProfile {
        /// User Id
        #[serde(rename = "_id")]
        pub user_id: String,

        /// Display name
        pub display_name: String,

        /// Role (student, mentor, organiser, ...)
        pub role: String,

        /// Education details
        #[serde(skip_serializing_if = "Option::is_none")]
        pub education: Option<Education>,

        /// Listed skills
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub skills: Vec<String>,

        /// Short biography
        #[serde(skip_serializing_if = "Option::is_none")]
        pub bio: Option<String>,

        /// Social links, keyed by platform name
        #[serde(skip_serializing_if = "HashMap::is_empty", default)]
        pub social_links: HashMap<String, String>,

        /// Avatar URL
        #[serde(skip_serializing_if = "Option::is_none")]
        pub avatar: Option<String>,
    }
);

#[cfg(test)]
mod tests {
    use crate::UserProfile;

    #[async_std::test]
    async fn upsert_and_fetch() {
        database_test!(|db| async move {
            let profile = UserProfile {
                user_id: "01USER".to_string(),
                display_name: "Anju".to_string(),
                role: "student".to_string(),
                education: None,
                skills: vec!["physics".to_string()],
                bio: None,
                social_links: Default::default(),
                avatar: None,
            };

            db.set_user_profile("01USER", &profile).await.unwrap();

            let fetched = db.fetch_user_profile("01USER").await.unwrap();
            assert_eq!(fetched, profile);

            // Whole-document overwrite, no merge.
            let updated = UserProfile {
                skills: vec![],
                bio: Some("JEE aspirant".to_string()),
                ..profile
            };
            db.set_user_profile("01USER", &updated).await.unwrap();

            let fetched = db.fetch_user_profile("01USER").await.unwrap();
            assert!(fetched.skills.is_empty());
            assert_eq!(fetched.bio.as_deref(), Some("JEE aspirant"));

            assert!(db.fetch_user_profile("02USER").await.is_err());
        });
    }
}
