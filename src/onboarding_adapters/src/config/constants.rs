pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const ENV_PREFIX: &str = "ONBOARDING";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod firebase {
    pub const IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/";
    pub const USERS_COLLECTION: &str = "users";
    pub const HAS_SEEN_ONBOARDING_FIELD: &str = "hasSeenOnboarding";
    pub const FEDERATED_REQUEST_URI: &str = "http://localhost";
}

pub mod prod {
    pub const CONFIG_DIR: &str = "config";
    pub const DEFAULT_ENVIRONMENT: &str = "local";

    pub mod http_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub mod http_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
