use chrono::Duration;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use onboarding_core::{
    AuthError, AuthSession, Email, FederatedCredential, Identity, Password, Session, SessionCell,
    SessionHandle, UserId,
};

/// Identity provider backed by the Firebase Identity Toolkit REST API.
pub struct FirebaseAuthSession {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
    federated_request_uri: String,
    session: SessionCell,
}

impl FirebaseAuthSession {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        federated_request_uri: String,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
            federated_request_uri,
            session: SessionCell::new(),
        }
    }

    fn endpoint(&self, method: &str) -> Result<Url, AuthError> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let mut url = Url::parse(&base)
            .and_then(|base| base.join(&format!("v1/accounts:{method}")))
            .map_err(|e| AuthError::Network(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose_secret());
        Ok(url)
    }

    async fn call<B, R>(&self, method: &str, body: &B) -> Result<R, AuthError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(self.endpoint(method)?)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<R>()
                .await
                .map_err(|e| AuthError::Network(e.to_string()));
        }

        let error = response
            .json::<ErrorEnvelope>()
            .await
            .map_err(|_| AuthError::Provider {
                code: status.as_u16().to_string(),
                message: status.to_string(),
            })?;

        tracing::warn!(code = %error.error.message, "Identity provider rejected request");
        Err(map_provider_error(&error.error.message))
    }

    fn start_session(&self, response: AccountResponse) -> Result<Identity, AuthError> {
        let identity = response.identity()?;

        let mut session = Session::new(identity.clone());
        if let Some(id_token) = response.id_token {
            let expires_in = response
                .expires_in
                .and_then(|seconds| seconds.parse::<i64>().ok())
                .map(Duration::seconds);
            session = session.with_id_token(Secret::from(id_token), expires_in);
        }
        self.session.set(session);

        Ok(identity)
    }
}

#[async_trait::async_trait]
impl AuthSession for FirebaseAuthSession {
    #[tracing::instrument(name = "Signing in with Firebase", skip_all)]
    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity, AuthError> {
        let request = PasswordRequest {
            email: email.as_ref().expose_secret(),
            password: password.as_ref().expose_secret(),
            return_secure_token: true,
        };
        let response: AccountResponse = self.call("signInWithPassword", &request).await?;
        self.start_session(response)
    }

    #[tracing::instrument(name = "Registering with Firebase", skip_all)]
    async fn register(&self, email: &Email, password: &Password) -> Result<Identity, AuthError> {
        let request = PasswordRequest {
            email: email.as_ref().expose_secret(),
            password: password.as_ref().expose_secret(),
            return_secure_token: true,
        };
        let response: AccountResponse = self.call("signUp", &request).await?;
        self.start_session(response)
    }

    #[tracing::instrument(
        name = "Federated sign-in with Firebase",
        skip_all,
        fields(provider = credential.provider().provider_id())
    )]
    async fn sign_in_with_federated_credential(
        &self,
        credential: &FederatedCredential,
    ) -> Result<Identity, AuthError> {
        // The serializer is not Send and must be gone before the request is awaited.
        let post_body = {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            serializer.append_pair("id_token", credential.id_token().expose_secret());
            if let Some(access_token) = credential.access_token() {
                serializer.append_pair("access_token", access_token.expose_secret());
            }
            serializer.append_pair("providerId", credential.provider().provider_id());
            serializer.finish()
        };

        let request = IdpRequest {
            post_body,
            request_uri: &self.federated_request_uri,
            return_secure_token: true,
            return_idp_credential: true,
        };
        let response: AccountResponse = self.call("signInWithIdp", &request).await?;
        self.start_session(response)
    }

    #[tracing::instrument(name = "Sending password reset with Firebase", skip_all)]
    async fn send_password_reset(&self, email: &Email) -> Result<(), AuthError> {
        let request = OobCodeRequest {
            request_type: PASSWORD_RESET,
            email: email.as_ref().expose_secret(),
        };
        let _: serde_json::Value = self.call("sendOobCode", &request).await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.session.clear();
        Ok(())
    }

    fn session(&self) -> SessionHandle {
        self.session.handle()
    }
}

/// Firebase reports failures as `CODE` or `CODE : detail`.
fn map_provider_error(message: &str) -> AuthError {
    let (code, detail) = match message.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (message.trim(), None),
    };

    match code {
        "EMAIL_EXISTS" => AuthError::EmailAlreadyInUse,
        "EMAIL_NOT_FOUND" => AuthError::UserNotFound,
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => AuthError::InvalidCredentials,
        "WEAK_PASSWORD" => {
            AuthError::WeakPassword(detail.unwrap_or("password rejected").to_string())
        }
        "INVALID_EMAIL" | "MISSING_EMAIL" => AuthError::InvalidEmail,
        "USER_DISABLED" => AuthError::UserDisabled,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthError::TooManyAttempts,
        "INVALID_IDP_RESPONSE"
        | "INVALID_CREDENTIAL_OR_PROVIDER_ID"
        | "FEDERATED_USER_ID_ALREADY_LINKED" => {
            AuthError::InvalidFederatedCredential(detail.unwrap_or(code).to_string())
        }
        _ => AuthError::Provider {
            code: code.to_string(),
            message: detail.unwrap_or(code).to_string(),
        },
    }
}

const PASSWORD_RESET: &str = "PASSWORD_RESET";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_secure_token: bool,
    return_idp_credential: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    full_name: Option<String>,
    id_token: Option<String>,
    expires_in: Option<String>,
}

impl AccountResponse {
    fn identity(&self) -> Result<Identity, AuthError> {
        if self.local_id.is_empty() {
            return Err(AuthError::Provider {
                code: "MISSING_LOCAL_ID".to_string(),
                message: "response did not contain an account id".to_string(),
            });
        }

        let mut identity = Identity::new(UserId::new(self.local_id.clone()));
        if let Some(email) = self.email.clone().filter(|email| !email.is_empty()) {
            let email = Email::try_from(Secret::from(email)).map_err(|_| AuthError::InvalidEmail)?;
            identity = identity.with_email(email);
        }
        let name = self
            .display_name
            .clone()
            .or_else(|| self.full_name.clone())
            .filter(|name| !name.is_empty());
        if let Some(name) = name {
            identity = identity.with_display_name(name);
        }
        Ok(identity)
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
