use std::fmt;

use thiserror::Error;

/// Fields a form or a provider profile must supply before anything reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Email,
    Password,
    FullName,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredField::Email => "email",
            RequiredField::Password => "password",
            RequiredField::FullName => "full name",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(RequiredField),
    #[error("Identity provider did not supply a {0}")]
    MissingProviderField(RequiredField),
}
