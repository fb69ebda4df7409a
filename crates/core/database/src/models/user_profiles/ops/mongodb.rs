use bson::to_document;
use mongodb::bson::doc;
use mongodb::options::ReplaceOptions;

use campusfeed_result::Result;

use super::AbstractUserProfiles;
use crate::{MongoDb, UserProfile};

static COL: &str = "user_profiles";

#[async_trait]
impl AbstractUserProfiles for MongoDb {
    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        query!(self, find_one_by_id, COL, user_id)?.ok_or_else(|| create_error!(UnknownUser))
    }

    async fn set_user_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
        let mut document =
            to_document(profile).map_err(|_| create_database_error!("to_document", COL))?;
        document.insert("_id", user_id);

        self.col::<bson::Document>(COL)
            .replace_one(
                doc! {
                    "_id": user_id
                },
                document,
            )
            .with_options(ReplaceOptions::builder().upsert(true).build())
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("replace_one", COL))
    }
}
