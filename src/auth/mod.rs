//! Authentication: nonce challenge, signature login, user profile.
//!
//! ## Flow
//!
//! 1. `client.auth().get_nonce(address)` returns a challenge message.
//! 2. The caller signs the message with the wallet (outside this SDK).
//! 3. `client.auth().authenticate(...)` exchanges the signature for a session
//!    token ([`AuthResponse::auth_token`]).
//! 4. The caller persists the token in its [`SessionStore`](crate::session::SessionStore);
//!    from then on every backend request carries `Authorization: Wallet <token>`.
//!
//! The SDK itself never stores or mutates the token.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// User profile
// ============================================================================

/// Read-only snapshot of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub wallet_address: String,
    #[serde(deserialize_with = "crate::shared::serde_util::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::shared::serde_util::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Wire types
// ============================================================================

/// Body for `POST /api/auth/nonce` and `POST /api/auth/refresh-nonce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceRequest {
    pub wallet_address: String,
}

/// Sign-in challenge. Expiry is enforced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceResponse {
    pub message: String,
    pub nonce: String,
    pub timestamp: i64,
}

/// Body for `POST /api/auth/authenticate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    pub wallet_address: String,
    pub signature: String,
    pub message: String,
    pub timestamp: i64,
}

/// Successful authentication.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub auth_token: String,
    pub user: UserProfile,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("auth_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Response from `GET /api/auth/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

/// Response from `POST /api/auth/refresh-nonce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshNonceResponse {
    pub nonce: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_request_uses_camel_case() {
        let req = AuthenticateRequest {
            wallet_address: "0xabc".to_string(),
            signature: "0xsig".to_string(),
            message: "Sign in".to_string(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["walletAddress"], "0xabc");
        assert_eq!(json["signature"], "0xsig");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_auth_response_deserialize() {
        let json = r#"{
            "authToken": "tok",
            "user": {
                "id": "u1",
                "walletAddress": "0xabc",
                "createdAt": "2024-01-15T10:30:00Z",
                "updatedAt": "2024-01-16T10:30:00.123Z"
            }
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.auth_token, "tok");
        assert_eq!(resp.user.wallet_address, "0xabc");
        assert!(resp.user.updated_at > resp.user.created_at);
        assert!(!format!("{:?}", resp).contains("tok\""));
    }

    #[test]
    fn test_profile_accepts_postgres_timestamps() {
        let json = r#"{
            "user": {
                "id": "u1",
                "walletAddress": "0xabc",
                "createdAt": "2024-01-15 10:30:00",
                "updatedAt": 1705314600000
            }
        }"#;
        let resp: ProfileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.created_at, resp.user.updated_at);
        assert_eq!(resp.user.created_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }
}
