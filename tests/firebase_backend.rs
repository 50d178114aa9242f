use config::{File, FileFormat};
use onboarding::{
    FederatedCredential, FederatedLoginOutcome, OnboardingOrchestrator, RegistrationForm, Secret,
    adapters::config::OnboardingSettings, configure_firebase,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(identity: &MockServer, database: &MockServer) -> OnboardingSettings {
    let source = json!({
        "firebase": {
            "api_key": "api-key",
            "identity_base_url": identity.uri(),
            "database_url": database.uri()
        },
        "http_client": { "timeout_in_millis": 500 }
    })
    .to_string();

    OnboardingSettings::defaults()
        .unwrap()
        .add_source(File::from_str(&source, FileFormat::Json))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[tokio::test]
async fn registration_writes_profile_with_session_token() {
    let identity = MockServer::start().await;
    let database = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", "api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-42",
            "email": "a@b.com",
            "idToken": "fresh-id-token",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&identity)
        .await;

    Mock::given(method("PUT"))
        .and(path("/users/uid-42.json"))
        .and(query_param("auth", "fresh-id-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&database)
        .await;

    let (auth_session, profile_store) =
        configure_firebase(&settings(&identity, &database)).unwrap();
    let orchestrator = OnboardingOrchestrator::new(auth_session, profile_store);

    let record = orchestrator
        .register(&RegistrationForm::new("a@b.com", "secret", "Ann"))
        .await
        .unwrap();

    assert_eq!(record.id().as_str(), "uid-42");
    assert!(!record.has_seen_onboarding());
}

#[tokio::test]
async fn returning_google_user_is_not_rewritten() {
    let identity = MockServer::start().await;
    let database = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithIdp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "g-7",
            "email": "ann@gmail.com",
            "displayName": "Ann Lee",
            "idToken": "google-session"
        })))
        .mount(&identity)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/g-7.json"))
        .and(query_param("shallow", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": true,
            "fullname": true,
            "hasSeenOnboarding": true
        })))
        .expect(1)
        .mount(&database)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&database)
        .await;

    let (auth_session, profile_store) =
        configure_firebase(&settings(&identity, &database)).unwrap();
    let orchestrator = OnboardingOrchestrator::new(auth_session, profile_store);

    let outcome = orchestrator
        .federated_login(&FederatedCredential::google(
            Secret::from("google-id-token".to_string()),
            Secret::from("google-access-token".to_string()),
        ))
        .await
        .unwrap();

    assert!(matches!(outcome, FederatedLoginOutcome::ExistingUser(_)));
}
