pub mod config;
pub mod helpers;
pub mod identity;
pub mod persistence;
pub mod telemetry;

pub use helpers::configure_firebase;
