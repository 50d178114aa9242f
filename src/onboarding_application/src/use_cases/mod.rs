pub mod fetch_profile;
pub mod federated_login;
pub mod login;
pub mod mark_onboarding_seen;
pub mod register;
pub mod reset_password;
