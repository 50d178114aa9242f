use async_trait::async_trait;
use thiserror::Error;

use crate::{
    domain::{
        email::Email, federated_credential::FederatedCredential, identity::Identity,
        password::Password,
    },
    session::SessionHandle,
};

/// Identity provider failures. The message is meant to be shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("The email or password is incorrect")]
    InvalidCredentials,
    #[error("The email address is already in use by another account")]
    EmailAlreadyInUse,
    #[error("The password is too weak: {0}")]
    WeakPassword(String),
    #[error("The email address is badly formatted")]
    InvalidEmail,
    #[error("There is no account for this email address")]
    UserNotFound,
    #[error("This account has been disabled")]
    UserDisabled,
    #[error("Too many attempts, try again later")]
    TooManyAttempts,
    #[error("The federated credential was rejected: {0}")]
    InvalidFederatedCredential(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Identity provider error {code}: {message}")]
    Provider { code: String, message: String },
}

/// Port over the remote identity provider.
///
/// Every operation is a single attempt with exactly one outcome. Successful
/// sign-in, registration and federated sign-in replace the current session;
/// `sign_out` clears it. No other component writes the session.
#[async_trait]
pub trait AuthSession: Send + Sync {
    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity, AuthError>;

    /// Create an account. The provider signs the new account in.
    async fn register(&self, email: &Email, password: &Password) -> Result<Identity, AuthError>;

    async fn sign_in_with_federated_credential(
        &self,
        credential: &FederatedCredential,
    ) -> Result<Identity, AuthError>;

    async fn send_password_reset(&self, email: &Email) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Read-only view of the current session.
    fn session(&self) -> SessionHandle;
}
