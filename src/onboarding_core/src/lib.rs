pub mod domain;
pub mod forms;
pub mod ports;
pub mod session;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    federated_credential::{FederatedCredential, FederatedProvider},
    full_name::FullName,
    identity::Identity,
    password::Password,
    user_id::UserId,
    user_record::UserRecord,
    validation_error::{RequiredField, ValidationError},
};

pub use forms::{
    FormViewModel, LoginCredentials, LoginForm, RegistrationDetails, RegistrationForm,
    ResetPasswordForm,
};

pub use ports::{
    auth_session::{AuthError, AuthSession},
    profile_store::{ProfileStore, ProfileStoreError},
};

pub use session::{Session, SessionCell, SessionHandle};
