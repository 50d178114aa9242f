use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use super::validation_error::{RequiredField, ValidationError};

/// An account email address.
///
/// Only emptiness is checked locally; format and uniqueness are the identity
/// provider's call.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(ValidationError::MissingField(RequiredField::Email));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_rejected() {
        let result = Email::try_from(Secret::from(String::new()));
        assert_eq!(
            result,
            Err(ValidationError::MissingField(RequiredField::Email))
        );
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(Email::try_from(Secret::from(" ".to_string())).is_ok());
    }
}
