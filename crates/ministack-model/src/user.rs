//! The user claims carried inside an init-data payload.

use serde::{Deserialize, Serialize};

/// Identity claims decoded from the `user` field of an init-data payload.
///
/// `id` and `first_name` are mandatory; decoding fails if either is missing
/// or has the wrong type. Unknown JSON members are ignored so that new
/// platform fields do not break verification.
///
/// # Examples
///
/// ```
/// use ministack_model::TelegramUser;
///
/// let user: TelegramUser =
///     serde_json::from_str(r#"{"id":123456789,"first_name":"John"}"#).unwrap();
/// assert_eq!(user.id, 123456789);
/// assert_eq!(user.first_name, "John");
/// assert!(user.last_name.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramUser {
    /// Telegram user ID.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name, if set on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Username, if set on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// IETF language tag of the user's client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Whether the user has a Premium subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

impl TelegramUser {
    /// Display name: first name, plus the last name when present.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {last}", self.first_name),
            None => self.first_name.clone(),
        }
    }
}
