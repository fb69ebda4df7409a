//! Durable device-local storage for the user's selected event categories.
//!
//! Preferences live under a fixed key in a small JSON-per-key store and do
//! not sync anywhere. They are overwritten wholesale on every save.

use std::path::PathBuf;

use campusfeed_database::Category;
use campusfeed_result::{create_error, Error, Result};

/// Storage key holding the user's selected event categories
pub const USER_EVENT_PREFERENCES_KEY: &str = "user_event_preferences";

/// Key-value store backed by one JSON file per key
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    root: PathBuf,
}

impl PreferenceStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|error| {
            tracing::error!("Failed to create preference directory: {error}");
            create_error!(StorageError {
                operation: "create_dir".to_string()
            })
        })?;

        Ok(PreferenceStore { root })
    }

    /// Open a store in the platform data directory
    pub fn open_default() -> Result<Self> {
        let root = dirs::data_dir()
            .ok_or_else(|| {
                create_error!(StorageError {
                    operation: "data_dir".to_string()
                })
            })?
            .join("campusfeed");

        PreferenceStore::open(root)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the stored preferences, distinguishing an absent value from a
    /// corrupted one
    ///
    /// An absent key is an empty preference set, not an error. A value
    /// that no longer parses is reported as [`ErrorType::PreferencesCorrupted`]
    /// so the caller can choose between fallback and propagation.
    ///
    /// [`ErrorType::PreferencesCorrupted`]: campusfeed_result::ErrorType
    pub async fn read(&self) -> Result<Vec<Category>> {
        let path = self.path_for(USER_EVENT_PREFERENCES_KEY);

        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(error) => {
                tracing::error!("Failed to read preferences: {error}");
                return Err(create_error!(StorageError {
                    operation: "read".to_string()
                }));
            }
        };

        serde_json::from_slice(&data).map_err(|_| create_error!(PreferencesCorrupted))
    }

    /// Read the stored preferences, degrading any failure to an empty set
    pub async fn get_user_event_preferences(&self) -> Vec<Category> {
        match self.read().await {
            Ok(preferences) => preferences,
            Err(Error { error_type, .. }) => {
                tracing::warn!("Falling back to empty preferences: {error_type:?}");
                vec![]
            }
        }
    }

    /// Serialise and overwrite the stored preferences unconditionally
    ///
    /// Unlike reads, write failures propagate to the caller.
    pub async fn update_user_event_preferences(&self, categories: &[Category]) -> Result<()> {
        let path = self.path_for(USER_EVENT_PREFERENCES_KEY);
        let data = serde_json::to_vec(categories).map_err(|_| create_error!(InternalError))?;

        tokio::fs::write(&path, data).await.map_err(|error| {
            tracing::error!("Failed to write preferences: {error}");
            create_error!(StorageError {
                operation: "write".to_string()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use campusfeed_database::Category;
    use campusfeed_result::ErrorType;

    use crate::{PreferenceStore, USER_EVENT_PREFERENCES_KEY};

    fn store() -> (tempfile::TempDir, PreferenceStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn missing_key_reads_as_empty() {
        let (_dir, store) = store();
        assert!(store.read().await.unwrap().is_empty());
        assert!(store.get_user_event_preferences().await.is_empty());
    }

    #[tokio::test]
    async fn round_trip_identity() {
        let (_dir, store) = store();

        for preferences in [
            vec![],
            vec![Category::Jee],
            vec![Category::Jee, Category::Neet, Category::Hackathons],
            Category::ALL.to_vec(),
        ] {
            store
                .update_user_event_preferences(&preferences)
                .await
                .unwrap();
            assert_eq!(store.get_user_event_preferences().await, preferences);
        }
    }

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let (_dir, store) = store();

        store
            .update_user_event_preferences(&[Category::Jee, Category::Neet])
            .await
            .unwrap();
        store
            .update_user_event_preferences(&[Category::Workshops])
            .await
            .unwrap();

        assert_eq!(
            store.get_user_event_preferences().await,
            vec![Category::Workshops]
        );
    }

    #[tokio::test]
    async fn corrupted_value_degrades_to_empty() {
        let (dir, store) = store();

        std::fs::write(
            dir.path().join(format!("{USER_EVENT_PREFERENCES_KEY}.json")),
            b"{not json",
        )
        .unwrap();

        assert!(matches!(
            store.read().await.unwrap_err().error_type,
            ErrorType::PreferencesCorrupted
        ));
        assert!(store.get_user_event_preferences().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_categories_count_as_corruption() {
        let (dir, store) = store();

        std::fs::write(
            dir.path().join(format!("{USER_EVENT_PREFERENCES_KEY}.json")),
            br#"["JEE", "Quiz Night"]"#,
        )
        .unwrap();

        assert!(store.get_user_event_preferences().await.is_empty());
    }
}
