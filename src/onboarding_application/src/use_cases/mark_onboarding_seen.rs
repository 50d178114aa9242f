use onboarding_core::{AuthSession, ProfileStore, ProfileStoreError};

#[derive(Debug, thiserror::Error)]
pub enum MarkOnboardingSeenError {
    #[error("No user is signed in")]
    NotAuthenticated,
    #[error("Profile store error: {0}")]
    ProfileStoreError(#[from] ProfileStoreError),
}

/// Flags the signed-in user's onboarding as seen
pub struct MarkOnboardingSeenUseCase<'a, A, P>
where
    A: AuthSession,
    P: ProfileStore,
{
    auth_session: &'a A,
    profile_store: &'a P,
}

impl<'a, A, P> MarkOnboardingSeenUseCase<'a, A, P>
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

    #[tracing::instrument(name = "MarkOnboardingSeenUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<(), MarkOnboardingSeenError> {
        let identity = self
            .auth_session
            .session()
            .identity()
            .ok_or(MarkOnboardingSeenError::NotAuthenticated)?;

        self.profile_store
            .mark_onboarding_seen(identity.id())
            .await?;

        Ok(())
    }
}
