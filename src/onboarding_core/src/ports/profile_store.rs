use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{user_id::UserId, user_record::UserRecord};

#[derive(Debug, Clone, Error)]
pub enum ProfileStoreError {
    #[error("Profile not found")]
    NotFound,
    #[error("Permission denied")]
    PermissionDenied,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for ProfileStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound)
                | (Self::PermissionDenied, Self::PermissionDenied)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Port over the remote profile document store, keyed by identity id.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn exists(&self, id: &UserId) -> Result<bool, ProfileStoreError>;

    /// Write the whole document, overwriting any existing one.
    async fn create(&self, record: &UserRecord) -> Result<(), ProfileStoreError>;

    /// Fails with `NotFound` when no document exists for `id`.
    async fn fetch(&self, id: &UserId) -> Result<UserRecord, ProfileStoreError>;

    /// Set the onboarding flag to true. Calling it again is a no-op success.
    /// Fails with `NotFound` and writes nothing when no document exists for `id`.
    async fn mark_onboarding_seen(&self, id: &UserId) -> Result<(), ProfileStoreError>;
}
