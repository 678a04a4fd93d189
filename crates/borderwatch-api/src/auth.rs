// Auth endpoints
//
// Login is the one call that is not JSON: the token endpoint takes
// URL-form-encoded credentials. It also deliberately does NOT write the
// session store -- the caller decides when to persist the returned pair,
// which keeps the handshake side-effect-free and testable on its own.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::models::{LoginResponse, Payload, UserProfile};

impl GatewayClient {
    /// Exchange credentials for a bearer token and profile.
    ///
    /// `POST /auth/token` with form-encoded `username`/`password`.
    ///
    /// The store is untouched; call [`SessionStore::set`] with the result
    /// to start an authenticated session.
    ///
    /// [`SessionStore::set`]: crate::session::SessionStore::set
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, Error> {
        let url = self.endpoint_url("auth/token")?;
        debug!("POST {}", url);

        let form = [("username", username), ("password", password.expose_secret())];
        self.execute(self.http().post(url).form(&form)).await
    }

    /// Create an account. The profile payload is forwarded as-is.
    ///
    /// `POST /auth/register`
    pub async fn register(&self, profile: &Payload) -> Result<UserProfile, Error> {
        self.post("auth/register", profile).await
    }

    /// Fetch the profile of the currently authenticated user.
    ///
    /// `GET /auth/me` -- fails with [`Error::Unauthorized`] (and triggers
    /// the centralized recovery) if the token is absent, expired, or
    /// invalid.
    pub async fn profile(&self) -> Result<UserProfile, Error> {
        self.get("auth/me").await
    }
}
