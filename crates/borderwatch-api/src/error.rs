use thiserror::Error;

/// Top-level error type for the `borderwatch-api` crate.
///
/// Covers every failure mode the gateway client can surface: transport
/// problems, authorization expiry, backend-reported request and server
/// failures, and body decoding. The client never swallows an error --
/// every variant propagates to the original caller.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Authorization ───────────────────────────────────────────────
    /// HTTP 401 from the backend. The session has already been cleared
    /// and the unauthorized hook fired by the time the caller sees this.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    // ── Backend-reported ────────────────────────────────────────────
    /// Any 4xx other than 401, surfaced verbatim. Interpretation
    /// (validation messages etc.) belongs to the caller.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Any 5xx, surfaced verbatim.
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the session was rejected
    /// and a fresh login is required.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns `true` if this is a transient error a calling layer
    /// might reasonably retry. The client itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Server { .. } => true,
            _ => false,
        }
    }

    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Api { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn unauthorized_reports_status_401() {
        let err = Error::Unauthorized { message: "expired".into() };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_transient());
    }

    #[test]
    fn server_errors_are_transient_client_errors_are_not() {
        let server = Error::Server { status: 503, message: "unavailable".into() };
        let client = Error::Api { status: 422, message: "bad payload".into() };
        assert!(server.is_transient());
        assert!(!client.is_transient());
        assert_eq!(client.status(), Some(422));
    }

    #[test]
    fn not_found_is_detected() {
        let err = Error::Api { status: 404, message: "no such sensor".into() };
        assert!(err.is_not_found());
    }
}
