use onboarding_core::{
    AuthError, AuthSession, FederatedCredential, FormViewModel, Identity, LoginForm,
    ProfileStore, ProfileStoreError, RegistrationForm, ResetPasswordForm, SessionHandle,
    UserRecord, ValidationError,
};
use thiserror::Error;

use crate::use_cases::{
    fetch_profile::{FetchProfileError, FetchProfileUseCase},
    federated_login::{FederatedLoginError, FederatedLoginOutcome, FederatedLoginUseCase},
    login::{LoginError, LoginUseCase},
    mark_onboarding_seen::{MarkOnboardingSeenError, MarkOnboardingSeenUseCase},
    register::{
        CompleteRegistrationError, CompleteRegistrationUseCase, PendingProfile, RegisterError,
        RegisterUseCase,
    },
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
};

/// Uniform error contract handed to the UI layer.
#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Store(#[from] ProfileStoreError),

    #[error("No user is signed in")]
    NotAuthenticated,

    /// The identity exists but its profile does not. Offer
    /// [`OnboardingOrchestrator::complete_registration`] instead of a new sign-up.
    #[error("Your account was created but your profile could not be saved: {source}")]
    PartialRegistration {
        pending: PendingProfile,
        source: ProfileStoreError,
    },
}

impl From<LoginError> for OnboardingError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::AuthError(e) => e.into(),
        }
    }
}

impl From<RegisterError> for OnboardingError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::AuthError(e) => e.into(),
            RegisterError::PartialRegistration { pending, source } => {
                OnboardingError::PartialRegistration { pending, source }
            }
        }
    }
}

impl From<CompleteRegistrationError> for OnboardingError {
    fn from(error: CompleteRegistrationError) -> Self {
        match error {
            CompleteRegistrationError::ProfileStoreError(e) => e.into(),
        }
    }
}

impl From<FederatedLoginError> for OnboardingError {
    fn from(error: FederatedLoginError) -> Self {
        match error {
            FederatedLoginError::AuthError(e) => e.into(),
            FederatedLoginError::ProfileStoreError(e) => e.into(),
            FederatedLoginError::ValidationError(e) => e.into(),
        }
    }
}

impl From<MarkOnboardingSeenError> for OnboardingError {
    fn from(error: MarkOnboardingSeenError) -> Self {
        match error {
            MarkOnboardingSeenError::NotAuthenticated => OnboardingError::NotAuthenticated,
            MarkOnboardingSeenError::ProfileStoreError(e) => e.into(),
        }
    }
}

impl From<FetchProfileError> for OnboardingError {
    fn from(error: FetchProfileError) -> Self {
        match error {
            FetchProfileError::NotAuthenticated => OnboardingError::NotAuthenticated,
            FetchProfileError::ProfileStoreError(e) => e.into(),
        }
    }
}

impl From<ResetPasswordError> for OnboardingError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::AuthError(e) => e.into(),
        }
    }
}

/// Entry point for the onboarding screens.
///
/// Sequences [`AuthSession`] and [`ProfileStore`] calls into the login,
/// registration and federated login flows. Each flow validates its form
/// locally first and makes no remote call when a required field is empty.
/// Steps within a flow run one after another and a failed step ends the flow;
/// nothing is retried here. Flows may run concurrently: the only shared state
/// is the session, which the orchestrator reads but never writes.
pub struct OnboardingOrchestrator<A, P>
where
    A: AuthSession,
    P: ProfileStore,
{
    auth_session: A,
    profile_store: P,
}

impl<A, P> OnboardingOrchestrator<A, P>
where
    A: AuthSession,
    P: ProfileStore,
{
    pub fn new(auth_session: A, profile_store: P) -> Self {
        Self {
            auth_session,
            profile_store,
        }
    }

    pub fn session(&self) -> SessionHandle {
        self.auth_session.session()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.session().identity()
    }

    pub async fn login(&self, form: &LoginForm) -> Result<Identity, OnboardingError> {
        let credentials = form.validate()?;

        Ok(LoginUseCase::new(&self.auth_session)
            .execute(credentials.email, credentials.password)
            .await?)
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<UserRecord, OnboardingError> {
        let details = form.validate()?;

        Ok(RegisterUseCase::new(&self.auth_session, &self.profile_store)
            .execute(details.email, details.password, details.full_name)
            .await?)
    }

    /// Retry the profile write of a registration that ended in
    /// [`OnboardingError::PartialRegistration`].
    pub async fn complete_registration(
        &self,
        pending: &PendingProfile,
    ) -> Result<UserRecord, OnboardingError> {
        Ok(CompleteRegistrationUseCase::new(&self.profile_store)
            .execute(pending)
            .await?)
    }

    pub async fn federated_login(
        &self,
        credential: &FederatedCredential,
    ) -> Result<FederatedLoginOutcome, OnboardingError> {
        Ok(
            FederatedLoginUseCase::new(&self.auth_session, &self.profile_store)
                .execute(credential)
                .await?,
        )
    }

    pub async fn mark_onboarding_seen(&self) -> Result<(), OnboardingError> {
        Ok(
            MarkOnboardingSeenUseCase::new(&self.auth_session, &self.profile_store)
                .execute()
                .await?,
        )
    }

    pub async fn reset_password(&self, form: &ResetPasswordForm) -> Result<(), OnboardingError> {
        let email = form.validate()?;

        Ok(ResetPasswordUseCase::new(&self.auth_session)
            .execute(email)
            .await?)
    }

    pub async fn fetch_current_profile(&self) -> Result<UserRecord, OnboardingError> {
        Ok(
            FetchProfileUseCase::new(&self.auth_session, &self.profile_store)
                .execute()
                .await?,
        )
    }

    /// Whether the onboarding pages should be shown to the signed-in user.
    pub async fn needs_onboarding(&self) -> Result<bool, OnboardingError> {
        let profile = self.fetch_current_profile().await?;
        Ok(!profile.has_seen_onboarding())
    }

    #[tracing::instrument(name = "OnboardingOrchestrator::sign_out", skip_all)]
    pub async fn sign_out(&self) -> Result<(), OnboardingError> {
        self.auth_session.sign_out().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockAuthSession, MockProfileStore};
    use onboarding_core::RequiredField;

    fn orchestrator() -> (
        OnboardingOrchestrator<MockAuthSession, MockProfileStore>,
        MockAuthSession,
        MockProfileStore,
    ) {
        let auth_session = MockAuthSession::default();
        let profile_store = MockProfileStore::default();
        (
            OnboardingOrchestrator::new(auth_session.clone(), profile_store.clone()),
            auth_session,
            profile_store,
        )
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_the_network() {
        let (orchestrator, auth_session, profile_store) = orchestrator();

        let login = orchestrator.login(&LoginForm::new("", "pw")).await;
        assert!(matches!(
            login,
            Err(OnboardingError::Validation(ValidationError::MissingField(
                RequiredField::Email
            )))
        ));

        let register = orchestrator
            .register(&RegistrationForm::new("a@b.com", "pw", ""))
            .await;
        assert!(matches!(
            register,
            Err(OnboardingError::Validation(ValidationError::MissingField(
                RequiredField::FullName
            )))
        ));

        let reset = orchestrator.reset_password(&ResetPasswordForm::default()).await;
        assert!(matches!(reset, Err(OnboardingError::Validation(_))));

        assert_eq!(auth_session.calls(), 0);
        assert_eq!(profile_store.calls(), 0);
    }

    #[tokio::test]
    async fn test_login_does_not_touch_profile_store() {
        let (orchestrator, _, profile_store) = orchestrator();
        orchestrator
            .register(&RegistrationForm::new("a@b.com", "pw", "Ann"))
            .await
            .unwrap();
        orchestrator.sign_out().await.unwrap();
        let calls_before = profile_store.calls();

        let identity = orchestrator
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(orchestrator.current_identity(), Some(identity));
        assert_eq!(profile_store.calls(), calls_before);
    }

    #[tokio::test]
    async fn test_partial_registration_and_recovery() {
        let auth_session = MockAuthSession::default();
        let profile_store = MockProfileStore::default().failing_creates();
        let orchestrator = OnboardingOrchestrator::new(auth_session, profile_store.clone());
        let form = RegistrationForm::new("a@b.com", "pw", "Ann");

        let Err(OnboardingError::PartialRegistration { pending, .. }) =
            orchestrator.register(&form).await
        else {
            panic!("expected a partial registration");
        };

        let retry = orchestrator.register(&form).await;
        assert!(matches!(
            retry,
            Err(OnboardingError::Auth(AuthError::EmailAlreadyInUse))
        ));

        profile_store.accept_creates();
        let record = orchestrator.complete_registration(&pending).await.unwrap();
        assert!(!record.has_seen_onboarding());
        assert!(orchestrator.needs_onboarding().await.unwrap());
    }

    #[tokio::test]
    async fn test_onboarding_flag_round_trip() {
        let (orchestrator, _, _) = orchestrator();
        orchestrator
            .register(&RegistrationForm::new("a@b.com", "pw", "Ann"))
            .await
            .unwrap();

        assert!(orchestrator.needs_onboarding().await.unwrap());
        orchestrator.mark_onboarding_seen().await.unwrap();
        orchestrator.mark_onboarding_seen().await.unwrap();
        assert!(!orchestrator.needs_onboarding().await.unwrap());
    }

    #[tokio::test]
    async fn test_signed_out_user_is_not_authenticated() {
        let (orchestrator, _, _) = orchestrator();

        assert!(matches!(
            orchestrator.mark_onboarding_seen().await,
            Err(OnboardingError::NotAuthenticated)
        ));
        assert!(matches!(
            orchestrator.fetch_current_profile().await,
            Err(OnboardingError::NotAuthenticated)
        ));
    }
}
