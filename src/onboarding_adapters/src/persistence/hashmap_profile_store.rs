use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use onboarding_core::{ProfileStore, ProfileStoreError, UserId, UserRecord};

#[derive(Default, Clone)]
pub struct HashMapProfileStore {
    profiles: Arc<RwLock<HashMap<UserId, UserRecord>>>,
}

impl HashMapProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ProfileStore for HashMapProfileStore {
    async fn exists(&self, id: &UserId) -> Result<bool, ProfileStoreError> {
        Ok(self.profiles.read().await.contains_key(id))
    }

    async fn create(&self, record: &UserRecord) -> Result<(), ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(record.id().clone(), record.clone());
        Ok(())
    }

    async fn fetch(&self, id: &UserId) -> Result<UserRecord, ProfileStoreError> {
        let profiles = self.profiles.read().await;
        profiles
            .get(id)
            .cloned()
            .ok_or(ProfileStoreError::NotFound)
    }

    async fn mark_onboarding_seen(&self, id: &UserId) -> Result<(), ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.get_mut(id).ok_or(ProfileStoreError::NotFound)?;
        profile.mark_onboarding_seen();
        Ok(())
    }
}
