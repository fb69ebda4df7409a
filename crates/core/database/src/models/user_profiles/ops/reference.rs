use campusfeed_result::Result;

use super::AbstractUserProfiles;
use crate::{ReferenceDb, UserProfile};

#[async_trait]
impl AbstractUserProfiles for ReferenceDb {
    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let user_profiles = self.user_profiles.lock().await;
        user_profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownUser))
    }

    async fn set_user_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
        let mut user_profiles = self.user_profiles.lock().await;
        user_profiles.insert(user_id.to_string(), profile.clone());
        Ok(())
    }
}
