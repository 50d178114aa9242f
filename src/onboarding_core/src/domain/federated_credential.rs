use secrecy::Secret;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FederatedProvider {
    #[serde(rename = "google.com")]
    Google,
}

impl FederatedProvider {
    pub fn provider_id(&self) -> &'static str {
        match self {
            FederatedProvider::Google => "google.com",
        }
    }
}

/// Token material obtained from a third-party sign-in, exchanged with the
/// identity provider for an identity.
#[derive(Debug, Clone)]
pub struct FederatedCredential {
    provider: FederatedProvider,
    id_token: Secret<String>,
    access_token: Option<Secret<String>>,
}

impl FederatedCredential {
    pub fn google(id_token: Secret<String>, access_token: Secret<String>) -> Self {
        Self {
            provider: FederatedProvider::Google,
            id_token,
            access_token: Some(access_token),
        }
    }

    pub fn new(
        provider: FederatedProvider,
        id_token: Secret<String>,
        access_token: Option<Secret<String>>,
    ) -> Self {
        Self {
            provider,
            id_token,
            access_token,
        }
    }

    pub fn provider(&self) -> FederatedProvider {
        self.provider
    }

    pub fn id_token(&self) -> &Secret<String> {
        &self.id_token
    }

    pub fn access_token(&self) -> Option<&Secret<String>> {
        self.access_token.as_ref()
    }
}
