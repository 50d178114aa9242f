use super::{email::Email, full_name::FullName, user_id::UserId};

/// Profile document of a registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    id: UserId,
    email: Email,
    full_name: FullName,
    has_seen_onboarding: bool,
}

impl UserRecord {
    /// A fresh profile for a newly created identity. Onboarding is always unseen.
    pub fn new(id: UserId, email: Email, full_name: FullName) -> Self {
        Self {
            id,
            email,
            full_name,
            has_seen_onboarding: false,
        }
    }

    /// Rebuild a record loaded from a store.
    pub fn restore(
        id: UserId,
        email: Email,
        full_name: FullName,
        has_seen_onboarding: bool,
    ) -> Self {
        Self {
            id,
            email,
            full_name,
            has_seen_onboarding,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn has_seen_onboarding(&self) -> bool {
        self.has_seen_onboarding
    }

    /// One-way transition; there is no way back to unseen.
    pub fn mark_onboarding_seen(&mut self) {
        self.has_seen_onboarding = true;
    }
}
