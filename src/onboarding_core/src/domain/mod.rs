pub mod email;
pub mod federated_credential;
pub mod full_name;
pub mod identity;
pub mod password;
pub mod user_id;
pub mod user_record;
pub mod validation_error;
