use onboarding_core::{
    AuthError, AuthSession, FederatedCredential, Identity, ProfileStore, ProfileStoreError,
    UserId, UserRecord, ValidationError,
};

/// How a federated sign-in ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FederatedLoginOutcome {
    /// First sign-in of this identity; a profile was created for it.
    NewUser(UserRecord),
    /// A profile already existed and was left untouched.
    ExistingUser(Identity),
}

impl FederatedLoginOutcome {
    pub fn user_id(&self) -> &UserId {
        match self {
            FederatedLoginOutcome::NewUser(record) => record.id(),
            FederatedLoginOutcome::ExistingUser(identity) => identity.id(),
        }
    }

    pub fn is_new_user(&self) -> bool {
        matches!(self, FederatedLoginOutcome::NewUser(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FederatedLoginError {
    #[error("Auth error: {0}")]
    AuthError(#[from] AuthError),
    #[error("Profile store error: {0}")]
    ProfileStoreError(#[from] ProfileStoreError),
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
}

/// Federated login use case - signs in with a provider credential and
/// bootstraps the profile on first sign-in
pub struct FederatedLoginUseCase<'a, A, P>
where
    A: AuthSession,
    P: ProfileStore,
{
    auth_session: &'a A,
    profile_store: &'a P,
}

impl<'a, A, P> FederatedLoginUseCase<'a, A, P>
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

    #[tracing::instrument(
        name = "FederatedLoginUseCase::execute",
        skip_all,
        fields(provider = credential.provider().provider_id())
    )]
    pub async fn execute(
        &self,
        credential: &FederatedCredential,
    ) -> Result<FederatedLoginOutcome, FederatedLoginError> {
        let identity = self
            .auth_session
            .sign_in_with_federated_credential(credential)
            .await?;

        if self.profile_store.exists(identity.id()).await? {
            tracing::info!(user_id = %identity.id(), "User already exists");
            return Ok(FederatedLoginOutcome::ExistingUser(identity));
        }

        let (email, full_name) = identity.profile_fields()?;
        let record = UserRecord::new(identity.id().clone(), email, full_name);
        self.profile_store.create(&record).await?;

        tracing::info!(user_id = %record.id(), "Created profile for new federated user");
        Ok(FederatedLoginOutcome::NewUser(record))
    }
}
