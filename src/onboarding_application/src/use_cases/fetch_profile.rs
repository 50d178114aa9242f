use onboarding_core::{AuthSession, ProfileStore, ProfileStoreError, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum FetchProfileError {
    #[error("No user is signed in")]
    NotAuthenticated,
    #[error("Profile store error: {0}")]
    ProfileStoreError(#[from] ProfileStoreError),
}

/// Loads the profile document of the signed-in user
pub struct FetchProfileUseCase<'a, A, P>
where
    A: AuthSession,
    P: ProfileStore,
{
    auth_session: &'a A,
    profile_store: &'a P,
}

impl<'a, A, P> FetchProfileUseCase<'a, A, P>
where
    A: AuthSession,
    P: ProfileStore,
{
    pub fn new(auth_session: &'a A, profile_store: &'a P) -> Self {
        Self {
            auth_session,
            profile_store,
        }
    }

    #[tracing::instrument(name = "FetchProfileUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<UserRecord, FetchProfileError> {
        let identity = self
            .auth_session
            .session()
            .identity()
            .ok_or(FetchProfileError::NotAuthenticated)?;

        Ok(self.profile_store.fetch(identity.id()).await?)
    }
}
