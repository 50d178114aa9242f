use onboarding_core::{AuthError, AuthSession, Email, Identity, Password};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Auth error: {0}")]
    AuthError(#[from] AuthError),
}

/// Login use case - email/password sign-in.
///
/// Does not touch the profile store; loading the profile after login is the
/// caller's business.
pub struct LoginUseCase<'a, A>
where
    A: AuthSession,
{
    auth_session: &'a A,
}

impl<'a, A> LoginUseCase<'a, A>
where
    A: AuthSession,
{
    pub fn new(auth_session: &'a A) -> Self {
        Self { auth_session }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - User's password
    ///
    /// # Returns
    /// The signed-in identity, or the provider's error unchanged
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<Identity, LoginError> {
        let identity = self.auth_session.sign_in(&email, &password).await?;
        tracing::info!(user_id = %identity.id(), "User signed in");
        Ok(identity)
    }
}
