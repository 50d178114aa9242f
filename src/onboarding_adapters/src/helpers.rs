use onboarding_core::AuthSession;

use crate::{
    config::OnboardingSettings,
    identity::FirebaseAuthSession,
    persistence::FirebaseProfileStore,
};

/// Build the Firebase identity provider and profile store from settings.
///
/// Both share one HTTP client, and the profile store authorizes its requests
/// with the provider's session.
///
/// # Returns
/// Result containing the auth session and profile store, or the HTTP client build error
pub fn configure_firebase(
    settings: &OnboardingSettings,
) -> reqwest::Result<(FirebaseAuthSession, FirebaseProfileStore)> {
    let http_client = settings.http_client.build_client()?;

    let auth_session = FirebaseAuthSession::new(
        settings.firebase.identity_base_url.clone(),
        settings.firebase.api_key.clone(),
        settings.firebase.federated_request_uri.clone(),
        http_client.clone(),
    );

    let profile_store = FirebaseProfileStore::new(
        settings.firebase.database_url.clone(),
        settings.firebase.users_collection.clone(),
        auth_session.session(),
        http_client,
    );

    Ok((auth_session, profile_store))
}
