use std::time::Duration;

use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{env, firebase, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingSettings {
    pub firebase: FirebaseSettings,
    pub http_client: HttpClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseSettings {
    pub api_key: Secret<String>,
    pub identity_base_url: String,
    pub database_url: String,
    pub users_collection: String,
    pub federated_request_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientSettings {
    pub timeout_in_millis: u64,
}

impl HttpClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }

    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder().timeout(self.timeout()).build()
    }
}

impl OnboardingSettings {
    /// Load settings from `config/base.json`, `config/{APP_ENVIRONMENT}.json`
    /// and `ONBOARDING__`-prefixed environment variables, later sources winning.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| prod::DEFAULT_ENVIRONMENT.to_string());

        Self::defaults()?
            .add_source(File::with_name(&format!("{}/base", prod::CONFIG_DIR)).required(false))
            .add_source(
                File::with_name(&format!("{}/{environment}", prod::CONFIG_DIR)).required(false),
            )
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }

    /// Builder preloaded with every value that has a sensible default.
    /// `firebase.api_key` and `firebase.database_url` have none.
    pub fn defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default(
                "firebase.identity_base_url",
                firebase::IDENTITY_TOOLKIT_BASE_URL,
            )?
            .set_default("firebase.users_collection", firebase::USERS_COLLECTION)?
            .set_default(
                "firebase.federated_request_uri",
                firebase::FEDERATED_REQUEST_URI,
            )?
            .set_default(
                "http_client.timeout_in_millis",
                prod::http_client::TIMEOUT.as_millis() as i64,
            )
    }
}
