use std::fmt;

use super::validation_error::{RequiredField, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl TryFrom<String> for FullName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ValidationError::MissingField(RequiredField::FullName));
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
