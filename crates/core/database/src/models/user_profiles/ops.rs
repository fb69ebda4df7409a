use campusfeed_result::Result;

use crate::UserProfile;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractUserProfiles: Sync + Send {
    /// Fetch a user profile by user id
    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile>;

    /// Insert or replace a user profile
    async fn set_user_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()>;
}
