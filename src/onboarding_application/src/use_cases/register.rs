use onboarding_core::{
    AuthError, AuthSession, Email, FullName, Identity, Password, ProfileStore, ProfileStoreError,
    UserId, UserRecord,
};

/// An identity that exists at the provider but whose profile document was
/// never written.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingProfile {
    identity: Identity,
    email: Email,
    full_name: FullName,
}

impl PendingProfile {
    pub fn new(identity: Identity, email: Email, full_name: FullName) -> Self {
        Self {
            identity,
            email,
            full_name,
        }
    }

    pub fn id(&self) -> &UserId {
        self.identity.id()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn to_record(&self) -> UserRecord {
        UserRecord::new(
            self.identity.id().clone(),
            self.email.clone(),
            self.full_name.clone(),
        )
    }
}

/// Error types for register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Auth error: {0}")]
    AuthError(#[from] AuthError),
    /// The account was created but its profile was not. Re-registering the
    /// same email will fail; retry with [`CompleteRegistrationUseCase`].
    #[error("Account created but its profile could not be saved: {source}")]
    PartialRegistration {
        pending: PendingProfile,
        source: ProfileStoreError,
    },
}

/// Register use case - creates the account, then its profile document
pub struct RegisterUseCase<'a, A, P>
where
    A: AuthSession,
    P: ProfileStore,
{
    auth_session: &'a A,
    profile_store: &'a P,
}

impl<'a, A, P> RegisterUseCase<'a, A, P>
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

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `email` - Email for the new account
    /// * `password` - Password for the new account
    /// * `full_name` - Name stored on the profile
    ///
    /// # Returns
    /// The stored profile, or the first failing step's error
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        full_name: FullName,
    ) -> Result<UserRecord, RegisterError> {
        let identity = self.auth_session.register(&email, &password).await?;

        let pending = PendingProfile::new(identity, email, full_name);
        let record = pending.to_record();

        if let Err(source) = self.profile_store.create(&record).await {
            tracing::error!(
                user_id = %pending.id(),
                error = %source,
                "Account created without a profile"
            );
            return Err(RegisterError::PartialRegistration { pending, source });
        }

        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompleteRegistrationError {
    #[error("Profile store error: {0}")]
    ProfileStoreError(#[from] ProfileStoreError),
}

/// Retries only the profile write of a partial registration.
pub struct CompleteRegistrationUseCase<'a, P>
where
    P: ProfileStore,
{
    profile_store: &'a P,
}

impl<'a, P> CompleteRegistrationUseCase<'a, P>
where
    P: ProfileStore,
{
    pub fn new(profile_store: &'a P) -> Self {
        Self { profile_store }
    }

    #[tracing::instrument(
        name = "CompleteRegistrationUseCase::execute",
        skip_all,
        fields(user_id = %pending.id())
    )]
    pub async fn execute(
        &self,
        pending: &PendingProfile,
    ) -> Result<UserRecord, CompleteRegistrationError> {
        let record = pending.to_record();
        self.profile_store.create(&record).await?;
        Ok(record)
    }
}
