use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;
use uuid::Uuid;

use onboarding_core::{
    AuthError, AuthSession, Email, FederatedCredential, Identity, Password, Session, SessionCell,
    SessionHandle, UserId,
};

#[derive(Clone)]
struct Account {
    id: UserId,
    password: Password,
}

/// In-process identity provider.
///
/// Email uniqueness is enforced atomically per email. Federated sign-in only
/// accepts id tokens registered with [`HashMapAuthSession::with_federated_identity`].
#[derive(Default, Clone)]
pub struct HashMapAuthSession {
    accounts: Arc<DashMap<Email, Account>>,
    federated: Arc<DashMap<String, Identity>>,
    password_resets: Arc<RwLock<Vec<Email>>>,
    session: SessionCell,
}

impl HashMapAuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id_token` exchangeable for `identity`.
    pub fn with_federated_identity(self, id_token: impl Into<String>, identity: Identity) -> Self {
        self.federated.insert(id_token.into(), identity);
        self
    }

    /// Emails a password reset was sent to, oldest first.
    pub async fn password_resets_sent(&self) -> Vec<Email> {
        self.password_resets.read().await.clone()
    }

    fn start_session(&self, identity: &Identity) {
        self.session.set(Session::new(identity.clone()));
    }
}

#[async_trait::async_trait]
impl AuthSession for HashMapAuthSession {
    #[tracing::instrument(name = "Signing in with in-memory provider", skip_all)]
    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity, AuthError> {
        let account = self
            .accounts
            .get(email)
            .map(|account| account.clone())
            .ok_or(AuthError::UserNotFound)?;

        if &account.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = Identity::new(account.id).with_email(email.clone());
        self.start_session(&identity);
        Ok(identity)
    }

    #[tracing::instrument(name = "Registering with in-memory provider", skip_all)]
    async fn register(&self, email: &Email, password: &Password) -> Result<Identity, AuthError> {
        let id = match self.accounts.entry(email.clone()) {
            Entry::Occupied(_) => return Err(AuthError::EmailAlreadyInUse),
            Entry::Vacant(entry) => {
                let id = UserId::new(Uuid::new_v4().simple().to_string());
                entry.insert(Account {
                    id: id.clone(),
                    password: password.clone(),
                });
                id
            }
        };

        let identity = Identity::new(id).with_email(email.clone());
        self.start_session(&identity);
        Ok(identity)
    }

    #[tracing::instrument(name = "Federated sign-in with in-memory provider", skip_all)]
    async fn sign_in_with_federated_credential(
        &self,
        credential: &FederatedCredential,
    ) -> Result<Identity, AuthError> {
        let identity = self
            .federated
            .get(credential.id_token().expose_secret())
            .map(|identity| identity.clone())
            .ok_or_else(|| {
                AuthError::InvalidFederatedCredential(format!(
                    "unknown {} token",
                    credential.provider().provider_id()
                ))
            })?;

        self.start_session(&identity);
        Ok(identity)
    }

    async fn send_password_reset(&self, email: &Email) -> Result<(), AuthError> {
        if !self.accounts.contains_key(email) {
            return Err(AuthError::UserNotFound);
        }
        self.password_resets.write().await.push(email.clone());
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.session.clear();
        Ok(())
    }

    fn session(&self) -> SessionHandle {
        self.session.handle()
    }
}
