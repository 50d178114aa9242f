//! Form-validity policy shared by the login, registration and password reset forms.
//!
//! A form is submittable iff every required field is present and non-empty.
//! Fields are optional because a UI text field may report no text at all.
//! The check is pure; callers recompute it on every field change to drive the
//! enabled state of the submit button.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::{
    email::Email, full_name::FullName, password::Password, validation_error::ValidationError,
};

pub trait FormViewModel {
    /// Domain values produced by a submittable form.
    type Validated;

    fn is_submittable(&self) -> bool;

    /// Same rule as [`FormViewModel::is_submittable`], yielding the first missing field.
    fn validate(&self) -> Result<Self::Validated, ValidationError>;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: Email,
    pub password: Password,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(Secret::from(password.into())),
        }
    }
}

impl FormViewModel for LoginForm {
    type Validated = LoginCredentials;

    fn is_submittable(&self) -> bool {
        is_filled(self.email.as_deref()) && is_filled(exposed(&self.password))
    }

    fn validate(&self) -> Result<LoginCredentials, ValidationError> {
        Ok(LoginCredentials {
            email: parse_email(&self.email)?,
            password: parse_password(&self.password)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
    #[serde(rename = "fullname")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegistrationDetails {
    pub email: Email,
    pub password: Password,
    pub full_name: FullName,
}

impl RegistrationForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(Secret::from(password.into())),
            full_name: Some(full_name.into()),
        }
    }
}

impl FormViewModel for RegistrationForm {
    type Validated = RegistrationDetails;

    fn is_submittable(&self) -> bool {
        is_filled(self.email.as_deref())
            && is_filled(exposed(&self.password))
            && is_filled(self.full_name.as_deref())
    }

    fn validate(&self) -> Result<RegistrationDetails, ValidationError> {
        Ok(RegistrationDetails {
            email: parse_email(&self.email)?,
            password: parse_password(&self.password)?,
            full_name: FullName::try_from(self.full_name.clone().unwrap_or_default())?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetPasswordForm {
    pub email: Option<String>,
}

impl ResetPasswordForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

impl FormViewModel for ResetPasswordForm {
    type Validated = Email;

    fn is_submittable(&self) -> bool {
        is_filled(self.email.as_deref())
    }

    fn validate(&self) -> Result<Email, ValidationError> {
        parse_email(&self.email)
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

fn exposed(value: &Option<Secret<String>>) -> Option<&str> {
    value.as_ref().map(|secret| secret.expose_secret().as_str())
}

fn parse_email(value: &Option<String>) -> Result<Email, ValidationError> {
    Email::try_from(Secret::from(value.clone().unwrap_or_default()))
}

fn parse_password(value: &Option<Secret<String>>) -> Result<Password, ValidationError> {
    let secret = value
        .clone()
        .unwrap_or_else(|| Secret::from(String::new()));
    Password::try_from(secret)
}
