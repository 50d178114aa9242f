use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use onboarding_core::{
    Email, FullName, ProfileStore, ProfileStoreError, SessionHandle, UserId, UserRecord,
};

use crate::config::firebase::HAS_SEEN_ONBOARDING_FIELD;

/// Profile store backed by the Firebase Realtime Database REST API.
///
/// Documents live at `{database_url}/{collection}/{id}.json`. Requests are
/// authorized with the current session's id token when one is present. The
/// token is read when the request is built, so a sign-in that completes
/// between a flow's identity call and its profile write changes which
/// token that write carries.
pub struct FirebaseProfileStore {
    http_client: Client,
    database_url: String,
    collection: String,
    session: SessionHandle,
}

impl FirebaseProfileStore {
    pub fn new(
        database_url: String,
        collection: String,
        session: SessionHandle,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            database_url,
            collection,
            session,
        }
    }

    fn document_url(&self, id: &UserId, field: Option<&str>) -> Result<Url, ProfileStoreError> {
        let mut base = self.database_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let path = match field {
            Some(field) => format!("{}/{}/{}.json", self.collection, id, field),
            None => format!("{}/{}.json", self.collection, id),
        };
        let mut url = Url::parse(&base)
            .and_then(|base| base.join(&path))
            .map_err(|e| ProfileStoreError::UnexpectedError(e.to_string()))?;

        let id_token = self
            .session
            .current()
            .and_then(|session| session.id_token().cloned());
        if let Some(id_token) = id_token {
            url.query_pairs_mut()
                .append_pair("auth", id_token.expose_secret());
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ProfileStoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProfileStoreError::UnexpectedError(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ProfileStoreError::PermissionDenied)
            }
            StatusCode::NOT_FOUND => Err(ProfileStoreError::NotFound),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ProfileStoreError::UnexpectedError(format!(
                    "{status}: {body}"
                )))
            }
        }
    }
}

#[async_trait::async_trait]
impl ProfileStore for FirebaseProfileStore {
    #[tracing::instrument(name = "Checking profile in Firebase", skip_all)]
    async fn exists(&self, id: &UserId) -> Result<bool, ProfileStoreError> {
        let mut url = self.document_url(id, None)?;
        url.query_pairs_mut().append_pair("shallow", "true");

        let value: serde_json::Value = self
            .send(self.http_client.get(url))
            .await?
            .json()
            .await
            .map_err(|e| ProfileStoreError::UnexpectedError(e.to_string()))?;

        Ok(!value.is_null())
    }

    #[tracing::instrument(name = "Writing profile to Firebase", skip_all)]
    async fn create(&self, record: &UserRecord) -> Result<(), ProfileStoreError> {
        let url = self.document_url(record.id(), None)?;
        let document = ProfileDocument::from(record);

        self.send(self.http_client.put(url).json(&document)).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Fetching profile from Firebase", skip_all)]
    async fn fetch(&self, id: &UserId) -> Result<UserRecord, ProfileStoreError> {
        let url = self.document_url(id, None)?;

        let document: Option<ProfileDocument> = self
            .send(self.http_client.get(url))
            .await?
            .json()
            .await
            .map_err(|e| ProfileStoreError::UnexpectedError(e.to_string()))?;

        document
            .ok_or(ProfileStoreError::NotFound)?
            .into_record(id.clone())
    }

    #[tracing::instrument(name = "Marking onboarding seen in Firebase", skip_all)]
    async fn mark_onboarding_seen(&self, id: &UserId) -> Result<(), ProfileStoreError> {
        // A field write on a missing document would create a stub profile.
        if !self.exists(id).await? {
            return Err(ProfileStoreError::NotFound);
        }
        let url = self.document_url(id, Some(HAS_SEEN_ONBOARDING_FIELD))?;

        self.send(self.http_client.put(url).json(&true)).await?;
        Ok(())
    }
}

/// Stored shape of a profile. The id is the document key, not a field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument {
    email: String,
    #[serde(rename = "fullname")]
    full_name: String,
    #[serde(default)]
    has_seen_onboarding: bool,
}

impl From<&UserRecord> for ProfileDocument {
    fn from(record: &UserRecord) -> Self {
        Self {
            email: record.email().as_ref().expose_secret().clone(),
            full_name: record.full_name().as_ref().to_string(),
            has_seen_onboarding: record.has_seen_onboarding(),
        }
    }
}

impl ProfileDocument {
    fn into_record(self, id: UserId) -> Result<UserRecord, ProfileStoreError> {
        let email = Email::try_from(Secret::from(self.email))
            .map_err(|e| ProfileStoreError::UnexpectedError(e.to_string()))?;
        let full_name = FullName::try_from(self.full_name)
            .map_err(|e| ProfileStoreError::UnexpectedError(e.to_string()))?;

        Ok(UserRecord::restore(
            id,
            email,
            full_name,
            self.has_seen_onboarding,
        ))
    }
}
