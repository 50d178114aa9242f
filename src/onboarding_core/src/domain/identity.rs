use super::{
    email::Email,
    full_name::FullName,
    user_id::UserId,
    validation_error::{RequiredField, ValidationError},
};

/// An authenticated account handle issued by the identity provider.
///
/// Email and display name are only present when the provider supplies them,
/// which federated providers may not do.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    id: UserId,
    email: Option<Email>,
    display_name: Option<String>,
}

impl Identity {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            email: None,
            display_name: None,
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Profile fields needed to bootstrap a user record from a federated sign-in.
    pub fn profile_fields(&self) -> Result<(Email, FullName), ValidationError> {
        let email = self
            .email
            .clone()
            .ok_or(ValidationError::MissingProviderField(RequiredField::Email))?;

        let full_name = self
            .display_name
            .clone()
            .ok_or(ValidationError::MissingProviderField(RequiredField::FullName))
            .and_then(|name| {
                FullName::try_from(name).map_err(|_| {
                    ValidationError::MissingProviderField(RequiredField::FullName)
                })
            })?;

        Ok((email, full_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn ann_email() -> Email {
        Email::try_from(Secret::from("ann@example.com".to_string())).unwrap()
    }

    #[test]
    fn profile_fields_require_email() {
        let identity = Identity::new(UserId::new("uid-1")).with_display_name("Ann");
        assert_eq!(
            identity.profile_fields(),
            Err(ValidationError::MissingProviderField(RequiredField::Email))
        );
    }

    #[test]
    fn profile_fields_reject_blank_display_name() {
        let identity = Identity::new(UserId::new("uid-1"))
            .with_email(ann_email())
            .with_display_name("");
        assert_eq!(
            identity.profile_fields(),
            Err(ValidationError::MissingProviderField(RequiredField::FullName))
        );
    }

    #[test]
    fn profile_fields_from_complete_identity() {
        let identity = Identity::new(UserId::new("uid-1"))
            .with_email(ann_email())
            .with_display_name("Ann");
        let (email, name) = identity.profile_fields().unwrap();
        assert_eq!(email, ann_email());
        assert_eq!(name.as_ref(), "Ann");
    }
}
