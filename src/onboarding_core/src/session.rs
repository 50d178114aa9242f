//! The currently authenticated identity.
//!
//! A [`SessionCell`] is owned by an `AuthSession` implementation and is the only
//! way to change the session. Everyone else reads through a [`SessionHandle`],
//! which always observes the latest value written to its cell.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Duration, Utc};
use secrecy::Secret;

use crate::domain::identity::Identity;

#[derive(Debug, Clone)]
pub struct Session {
    identity: Identity,
    id_token: Option<Secret<String>>,
    signed_in_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            id_token: None,
            signed_in_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Attach the provider's id token, optionally with its remaining lifetime.
    pub fn with_id_token(mut self, id_token: Secret<String>, expires_in: Option<Duration>) -> Self {
        self.expires_at = expires_in.map(|lifetime| self.signed_in_at + lifetime);
        self.id_token = Some(id_token);
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn id_token(&self) -> Option<&Secret<String>> {
        self.id_token.as_ref()
    }

    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

/// Write side of the session slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct SessionCell {
    current: Arc<ArcSwapOption<Session>>,
}

impl SessionCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, session: Session) {
        self.current.store(Some(Arc::new(session)));
    }

    pub fn clear(&self) {
        self.current.store(None);
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            current: Arc::clone(&self.current),
        }
    }
}

/// Read side of the session slot.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    current: Arc<ArcSwapOption<Session>>,
}

impl SessionHandle {
    pub fn current(&self) -> Option<Arc<Session>> {
        self.current.load_full()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.current().map(|session| session.identity().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.load().is_some()
    }
}
