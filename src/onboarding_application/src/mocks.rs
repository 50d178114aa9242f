//! In-process port implementations shared by the use case and orchestrator tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use onboarding_core::{
    AuthError, AuthSession, Email, FederatedCredential, Identity, Password, ProfileStore,
    ProfileStoreError, Session, SessionCell, SessionHandle, UserId, UserRecord,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn email(value: &str) -> Email {
    Email::try_from(Secret::from(value.to_string())).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::from(value.to_string())).unwrap()
}

#[derive(Clone, Default)]
pub struct MockAuthSession {
    accounts: Arc<RwLock<HashMap<String, (UserId, String)>>>,
    federated: Arc<RwLock<HashMap<String, Identity>>>,
    calls: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
    session: SessionCell,
}

impl MockAuthSession {
    pub async fn with_account(self, email: &str, password: &str) -> Self {
        let id = self.mint_id();
        self.accounts
            .write()
            .await
            .insert(email.to_string(), (id, password.to_string()));
        self
    }

    pub async fn with_federated_identity(self, id_token: &str, identity: Identity) -> Self {
        self.federated
            .write()
            .await
            .insert(id_token.to_string(), identity);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn mint_id(&self) -> UserId {
        UserId::new(format!("uid-{}", self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    fn start_session(&self, identity: &Identity) {
        self.session.set(Session::new(identity.clone()));
    }
}

#[async_trait::async_trait]
impl AuthSession for MockAuthSession {
    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.read().await;
        let (id, stored) = accounts
            .get(email.as_ref().expose_secret())
            .ok_or(AuthError::InvalidCredentials)?;
        if stored != password.as_ref().expose_secret() {
            return Err(AuthError::InvalidCredentials);
        }
        let identity = Identity::new(id.clone()).with_email(email.clone());
        self.start_session(&identity);
        Ok(identity)
    }

    async fn register(&self, email: &Email, password: &Password) -> Result<Identity, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.write().await;
        let key = email.as_ref().expose_secret().clone();
        if accounts.contains_key(&key) {
            return Err(AuthError::EmailAlreadyInUse);
        }
        let id = self.mint_id();
        accounts.insert(key, (id.clone(), password.as_ref().expose_secret().clone()));
        let identity = Identity::new(id).with_email(email.clone());
        self.start_session(&identity);
        Ok(identity)
    }

    async fn sign_in_with_federated_credential(
        &self,
        credential: &FederatedCredential,
    ) -> Result<Identity, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let identity = self
            .federated
            .read()
            .await
            .get(credential.id_token().expose_secret())
            .cloned()
            .ok_or_else(|| AuthError::InvalidFederatedCredential("unknown token".to_string()))?;
        self.start_session(&identity);
        Ok(identity)
    }

    async fn send_password_reset(&self, email: &Email) -> Result<(), AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self
            .accounts
            .read()
            .await
            .contains_key(email.as_ref().expose_secret())
        {
            Ok(())
        } else {
            Err(AuthError::UserNotFound)
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.session.clear();
        Ok(())
    }

    fn session(&self) -> SessionHandle {
        self.session.handle()
    }
}

#[derive(Clone, Default)]
pub struct MockProfileStore {
    records: Arc<RwLock<HashMap<UserId, UserRecord>>>,
    calls: Arc<AtomicUsize>,
    creates: Arc<AtomicUsize>,
    fail_creates: Arc<AtomicBool>,
}

impl MockProfileStore {
    pub async fn with_record(self, record: UserRecord) -> Self {
        self.records.write().await.insert(record.id().clone(), record);
        self
    }

    pub fn failing_creates(self) -> Self {
        self.fail_creates.store(true, Ordering::SeqCst);
        self
    }

    pub fn accept_creates(&self) {
        self.fail_creates.store(false, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub async fn get(&self, id: &UserId) -> Option<UserRecord> {
        self.records.read().await.get(id).cloned()
    }
}

#[async_trait::async_trait]
impl ProfileStore for MockProfileStore {
    async fn exists(&self, id: &UserId) -> Result<bool, ProfileStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.read().await.contains_key(id))
    }

    async fn create(&self, record: &UserRecord) -> Result<(), ProfileStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(ProfileStoreError::UnexpectedError(
                "write rejected".to_string(),
            ));
        }
        self.records
            .write()
            .await
            .insert(record.id().clone(), record.clone());
        Ok(())
    }

    async fn fetch(&self, id: &UserId) -> Result<UserRecord, ProfileStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(ProfileStoreError::NotFound)
    }

    async fn mark_onboarding_seen(&self, id: &UserId) -> Result<(), ProfileStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.write().await;
        let record = records.get_mut(id).ok_or(ProfileStoreError::NotFound)?;
        record.mark_onboarding_seen();
        Ok(())
    }
}
