// Gateway HTTP client
//
// Wraps `reqwest::Client` with URL construction, the bearer-token request
// interceptor, and the centralized 401 recovery. All resource façades
// (auth, sensors, cameras, alerts, dashboard) are implemented as inherent
// methods in separate files so this module stays focused on transport
// mechanics -- and so no endpoint can bypass the interceptor pair.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::session::{SessionStore, UnauthorizedHook};
use crate::transport::TransportConfig;

/// Session-aware client for the BorderWatch gateway.
///
/// Owns one configured HTTP client, one [`SessionStore`], and one
/// [`UnauthorizedHook`]. Before every outbound call the current token
/// (if any) is attached as a bearer credential; on every HTTP 401 the
/// session is cleared and the hook fired, at most once per expiry, before
/// the failure propagates to the caller. Nothing is retried, cached, or
/// validated here -- those policies belong to calling layers.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn SessionStore>,
    on_unauthorized: Arc<dyn UnauthorizedHook>,
}

impl GatewayClient {
    /// Create a client from a [`TransportConfig`].
    pub fn new(
        transport: &TransportConfig,
        store: Arc<dyn SessionStore>,
        on_unauthorized: Arc<dyn UnauthorizedHook>,
    ) -> Result<Self, Error> {
        let base_url = transport.base_url()?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            store,
            on_unauthorized,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this when the host already configured its own transport
    /// (TLS, proxies) or in tests pointing at a mock server.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        store: Arc<dyn SessionStore>,
        on_unauthorized: Arc<dyn UnauthorizedHook>,
    ) -> Self {
        Self {
            http,
            base_url,
            store,
            on_unauthorized,
        }
    }

    /// The gateway base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The session store this client reads before every call.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The underlying HTTP client, for calls that shape their own body
    /// (the form-encoded login). Requests built from it still go through
    /// [`execute`](Self::execute) and therefore the interceptor pair.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/{path}`.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&full).map_err(Error::InvalidUrl)
    }

    // ── Verb helpers ─────────────────────────────────────────────────

    /// Send a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("GET {}", url);
        self.execute(self.http.get(url)).await
    }

    /// Send a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;
        debug!("GET {}", url);
        self.execute(self.http.get(url).query(query)).await
    }

    /// Send a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;
        debug!("POST {}", url);
        self.execute(self.http.post(url).json(body)).await
    }

    /// Send a POST request with no body (the simulate endpoints).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("POST {}", url);
        self.execute(self.http.post(url)).await
    }

    /// Send a PUT request with a JSON body.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;
        debug!("PUT {}", url);
        self.execute(self.http.put(url).json(body)).await
    }

    /// Send a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("DELETE {}", url);
        self.execute(self.http.delete(url)).await
    }

    // ── Interceptor pipeline ─────────────────────────────────────────

    /// Run one request through the full pipeline: attach the bearer
    /// credential, send, then inspect the response.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, Error> {
        let request = self.authorize(request);
        let response = request.send().await.map_err(Error::Transport)?;
        self.intercept(response).await
    }

    /// Request interceptor: attach `Authorization: Bearer <token>` when
    /// the store holds a token. Runs for every verb and every façade;
    /// there is no unauthenticated allowlist -- login simply has no
    /// token yet, so the header is naturally absent.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.get().token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Response interceptor: 2xx bodies decode and pass through; 401
    /// triggers the centralized recovery; everything else propagates
    /// verbatim without touching the session.
    async fn intercept<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // `clear` reports whether a session was actually dropped, so
            // N concurrent 401s fire the hook exactly once.
            if self.store.clear() {
                debug!("session rejected by gateway, requesting login redirect");
                self.on_unauthorized.on_unauthorized();
            }
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Unauthorized { message });
        }

        if status.is_client_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status.is_server_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
