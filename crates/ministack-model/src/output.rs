//! The flat output record emitted to downstream consumers.

use serde::{Deserialize, Serialize};

use crate::user::TelegramUser;

/// The per-item output record of a verification.
///
/// A successful verification sets `verified` and `is_authenticated` to `true`
/// and carries the extracted claims plus the computed convenience fields
/// `user_id` and `user_name`. A soft failure sets both flags to `false` and
/// carries only the rejection message in `error`. Optional fields are omitted
/// from the serialized form entirely rather than emitted as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthOutput {
    /// Whether the payload passed verification.
    pub verified: bool,
    /// The `query_id` field of the verified payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    /// The verified user claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TelegramUser>,
    /// Claimed issuance time, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_date: Option<i64>,
    /// Convenience copy of the user's ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Convenience display name (first name plus last name when present).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Mirror of `verified`, kept for downstream consumers that branch on it.
    pub is_authenticated: bool,
    /// The raw init-data string, surfaced only when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<String>,
    /// The received signature, surfaced only when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Rejection message, present only on soft failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutput {
    /// Build the soft-failure record for a rejected payload.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            verified: false,
            query_id: None,
            user: None,
            auth_date: None,
            user_id: None,
            user_name: None,
            is_authenticated: false,
            raw_data: None,
            hash: None,
            error: Some(message.into()),
        }
    }
}
