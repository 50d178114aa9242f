use onboarding_core::{AuthError, AuthSession, Email};

#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Auth error: {0}")]
    AuthError(#[from] AuthError),
}

/// Reset password use case - asks the provider to email a reset link
pub struct ResetPasswordUseCase<'a, A>
where
    A: AuthSession,
{
    auth_session: &'a A,
}

impl<'a, A> ResetPasswordUseCase<'a, A>
where
    A: AuthSession,
{
    pub fn new(auth_session: &'a A) -> Self {
        Self { auth_session }
    }

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email) -> Result<(), ResetPasswordError> {
        self.auth_session.send_password_reset(&email).await?;
        Ok(())
    }
}
