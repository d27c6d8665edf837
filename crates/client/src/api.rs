//! Auth-aware admin API client.
//!
//! Centralizes outbound request construction: every call reads the current
//! session and, when a token is present, attaches it as a bearer credential;
//! when absent, the request goes out unauthenticated. One method per API
//! operation, each issuing a single HTTP call and returning the decoded
//! `data` payload unchanged.
//!
//! Response bodies are envelopes of the form
//! `{ "success": bool, "message": string?, "data": T? }`. A `success: false`
//! body maps to [`ApiError::Rejected`]; transport failures and error status
//! codes map to [`ApiError::Http`]. The client performs no retries and no
//! token refresh.

use std::sync::Arc;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::{Profile, Session, SessionStore, SessionStoreError};
use crate::types::{CountData, LoginData, NewAdmin, Record};

/// Admin API client.
///
/// Cheap to clone; all clones share the HTTP connection pool and the
/// in-memory session.
#[derive(Debug, Clone)]
pub struct AdminApi {
    inner: Arc<AdminApiInner>,
}

#[derive(Debug)]
struct AdminApiInner {
    http: reqwest::Client,
    base_url: String,
    /// Current session, if authenticated.
    session: RwLock<Option<Session>>,
    /// On-disk persistence, when the caller wants the session to survive
    /// the process.
    store: Option<SessionStore>,
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

impl<T> Envelope<T> {
    /// Accept a payload-bearing response.
    fn into_data(self) -> Result<T, ApiError> {
        self.check_success()?;
        self.data.ok_or(ApiError::MissingData)
    }

    /// Accept a response where only the success flag matters (updates and
    /// deletes; the service sends no payload worth keeping).
    fn into_ack(self) -> Result<(), ApiError> {
        self.check_success()
    }

    fn check_success(&self) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        Err(ApiError::Rejected {
            message: self
                .message
                .clone()
                .unwrap_or_else(|| "Request failed".to_owned()),
        })
    }
}

impl AdminApi {
    /// Create a client with an in-memory session only.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::build(config, None, None)
    }

    /// Create a client backed by a session store.
    ///
    /// The store is read once here: a persisted token means the client
    /// starts out authenticated. Login and logout keep the store in sync.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    pub fn with_store(
        config: ClientConfig,
        store: SessionStore,
    ) -> Result<Self, SessionStoreError> {
        let session = store.load()?;
        Ok(Self::build(config, Some(store), session))
    }

    fn build(config: ClientConfig, store: Option<SessionStore>, session: Option<Session>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            inner: Arc::new(AdminApiInner {
                http,
                base_url: config.base_url,
                session: RwLock::new(session),
                store,
            }),
        }
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// The current session, if authenticated.
    pub async fn session(&self) -> Option<Session> {
        self.inner.session.read().await.clone()
    }

    /// Whether a session token is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.session.read().await.is_some()
    }

    /// Authenticate with email and password.
    ///
    /// On body-level success the returned token and profile become the
    /// active session (persisted if a store is attached). On rejection the
    /// session state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server's message on invalid
    /// credentials, or `ApiError::Http` on transport failure.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Profile, ApiError> {
        let body = serde_json::json!({
            "email": email,
            "password": password.expose_secret(),
        });
        let request = self.request(Method::POST, "/api/admin/login").await.json(&body);
        let data: LoginData = self.fetch(request).await?;
        self.install_session(data).await
    }

    /// Register a new admin account.
    ///
    /// Like login, a successful signup returns a token and becomes the
    /// active session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server's message if the account
    /// cannot be created, or `ApiError::Http` on transport failure.
    #[instrument(skip(self, new_admin), fields(email = %new_admin.email))]
    pub async fn signup(&self, new_admin: &NewAdmin) -> Result<Profile, ApiError> {
        let body = serde_json::json!({
            "firstname": new_admin.firstname,
            "lastname": new_admin.lastname,
            "email": new_admin.email,
            "username": new_admin.username,
            "password": new_admin.password.expose_secret(),
            "adminType": new_admin.role,
        });
        let request = self.request(Method::POST, "/api/admin/signup").await.json(&body);
        let data: LoginData = self.fetch(request).await?;
        self.install_session(data).await
    }

    /// Drop the active session.
    ///
    /// Purely local: clears the in-memory session and the store slots. No
    /// server call is made.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Store` if the persisted slots cannot be removed.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        *self.inner.session.write().await = None;
        if let Some(store) = &self.inner.store {
            store.clear()?;
        }
        Ok(())
    }

    async fn install_session(&self, data: LoginData) -> Result<Profile, ApiError> {
        let session = Session {
            token: SecretString::from(data.token),
            profile: data.profile.clone(),
        };
        if let Some(store) = &self.inner.store {
            store.save(&session)?;
        }
        *self.inner.session.write().await = Some(session);
        Ok(data.profile)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<Record>, ApiError> {
        let request = self.request(Method::GET, "/api/users").await;
        self.fetch(request).await
    }

    /// Fetch a single user by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> Result<Record, ApiError> {
        let request = self
            .request(Method::GET, &format!("/api/admin/users/getbyid/{user_id}"))
            .await;
        self.fetch(request).await
    }

    /// Number of registered users.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn count_users(&self) -> Result<u64, ApiError> {
        let request = self.request(Method::GET, "/api/users/count").await;
        let data: CountData = self.fetch(request).await?;
        Ok(data.count)
    }

    /// Most recently created users.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn recent_users(&self) -> Result<Vec<Record>, ApiError> {
        let request = self.request(Method::GET, "/api/admin/users/recent").await;
        self.fetch(request).await
    }

    /// Apply a partial update to a user.
    ///
    /// The patch is an opaque field set passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self, patch))]
    pub async fn update_user(&self, user_id: &str, patch: &Record) -> Result<(), ApiError> {
        let request = self
            .request(Method::PUT, &format!("/api/users/{user_id}"))
            .await
            .json(patch);
        self.acknowledge(request).await
    }

    /// Delete a user (or admin) record by id.
    ///
    /// The service exposes a single delete endpoint for both tables.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let request = self
            .request(Method::DELETE, &format!("/api/users/{user_id}"))
            .await;
        self.acknowledge(request).await
    }

    // =========================================================================
    // Admins
    // =========================================================================

    /// List all admin accounts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn list_admins(&self) -> Result<Vec<Record>, ApiError> {
        let request = self.request(Method::GET, "/api/admin/all").await;
        self.fetch(request).await
    }

    /// Number of admin accounts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn count_admins(&self) -> Result<u64, ApiError> {
        let request = self.request(Method::GET, "/api/admin/users/count").await;
        let data: CountData = self.fetch(request).await?;
        Ok(data.count)
    }

    /// Apply a partial update to an admin account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self, patch))]
    pub async fn update_admin(&self, admin_id: &str, patch: &Record) -> Result<(), ApiError> {
        let request = self
            .request(Method::PUT, &format!("/api/admin/update/{admin_id}"))
            .await
            .json(patch);
        self.acknowledge(request).await
    }

    // =========================================================================
    // Todos
    // =========================================================================

    /// List all todos across all users.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn list_todos(&self) -> Result<Vec<Record>, ApiError> {
        let request = self.request(Method::GET, "/api/admin/todos").await;
        self.fetch(request).await
    }

    /// List the todos belonging to one user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    #[instrument(skip(self))]
    pub async fn todos_for_user(&self, user_id: &str) -> Result<Vec<Record>, ApiError> {
        let request = self
            .request(Method::GET, &format!("/api/admin/todos/user/{user_id}"))
            .await;
        self.fetch(request).await
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    /// Build a request against the configured base URL, attaching the
    /// session token as a bearer credential when one is held.
    async fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let mut request = self.inner.http.request(method, url);
        if let Some(session) = self.inner.session.read().await.as_ref() {
            request = request.bearer_auth(session.token.expose_secret());
        }
        request
    }

    /// Execute a request and return the envelope's data payload.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        envelope.into_data()
    }

    /// Execute a request where only the envelope's success flag matters.
    async fn acknowledge(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_slice(&bytes)?;
        envelope.into_ack()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> Envelope<serde_json::Value> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_envelope_success_yields_data() {
        let envelope = decode(r#"{"success":true,"data":{"count":3}}"#);
        let data = envelope.into_data().unwrap();
        assert_eq!(data["count"], 3);
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let envelope = decode(r#"{"success":false,"message":"Invalid credentials"}"#);
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.rejection_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_envelope_failure_without_message_gets_fallback() {
        let envelope = decode(r#"{"success":false}"#);
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.rejection_message(), Some("Request failed"));
    }

    #[test]
    fn test_envelope_success_without_data_is_missing_data() {
        let envelope = decode(r#"{"success":true}"#);
        let err = envelope.into_data().unwrap_err();
        assert!(matches!(err, ApiError::MissingData));
    }

    #[test]
    fn test_envelope_ack_ignores_missing_data() {
        let envelope = decode(r#"{"success":true}"#);
        assert!(envelope.into_ack().is_ok());

        let envelope = decode(r#"{"success":false,"message":"Failed to update user."}"#);
        let err = envelope.into_ack().unwrap_err();
        assert!(err.is_rejection());
    }

    #[tokio::test]
    async fn test_new_client_starts_anonymous() {
        let api = AdminApi::new(ClientConfig::default());
        assert!(!api.is_authenticated().await);
        assert!(api.session().await.is_none());
    }
}
