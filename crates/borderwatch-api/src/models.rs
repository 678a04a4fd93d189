// Shared API types
//
// The gateway passes domain payloads through verbatim -- sensors, cameras,
// and alerts are created and updated with whatever JSON the caller supplies,
// and the backend is authoritative about their shape. Only the handful of
// types the client itself needs to understand are modeled here.

use serde::{Deserialize, Serialize};

/// Opaque request/response payload: a JSON object forwarded as-is.
///
/// Create/update bodies are deliberately untyped -- this client performs
/// no validation or transformation of domain data.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// The authenticated user's profile as returned by `/auth/me` and the
/// login handshake. Decoded, never validated; unknown fields are kept
/// in `extra` so nothing the backend sends is dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Catch-all for fields this client does not interpret.
    #[serde(flatten)]
    pub extra: Payload,
}

/// Result of a successful login: the bearer token plus the profile it
/// belongs to. The client does not store this anywhere -- the caller
/// decides when (and whether) to hand it to a [`SessionStore`].
///
/// [`SessionStore`]: crate::session::SessionStore
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Alert severity, for display classification only.
///
/// The client never enforces this enumeration on write -- alert payloads
/// are forwarded verbatim and the server is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{LoginResponse, Severity, UserProfile};

    #[test]
    fn profile_keeps_unknown_fields() {
        let profile: UserProfile = serde_json::from_value(json!({
            "full_name": "Ana Reyes",
            "email": "ana@example.com",
            "role": "operator",
            "id": "u-17"
        }))
        .expect("profile should decode");

        assert_eq!(profile.full_name.as_deref(), Some("Ana Reyes"));
        assert_eq!(profile.extra.get("role"), Some(&json!("operator")));
    }

    #[test]
    fn login_response_decodes_token_and_user() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "token": "abc",
            "user": { "full_name": "A" }
        }))
        .expect("login response should decode");

        assert_eq!(resp.token, "abc");
        assert_eq!(resp.user.full_name.as_deref(), Some("A"));
    }

    #[test]
    fn severity_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::from_value::<Severity>(json!("critical")).ok(),
            Some(Severity::Critical)
        );
        assert_eq!(serde_json::to_value(Severity::Low).ok(), Some(json!("low")));
        assert!(Severity::Critical > Severity::High);
    }
}
