pub mod auth_session;
pub mod profile_store;
