//! The bot token that keys signature verification.

use std::fmt;

use crate::error::VerifyError;

/// The BotFather-issued secret that keys the first HMAC stage.
///
/// The token is never logged: the `Debug` impl prints a redacted placeholder,
/// and access to the secret bytes requires an explicit [`expose`](Self::expose)
/// call at the use site.
///
/// # Examples
///
/// ```
/// use ministack_auth::BotToken;
///
/// let token = BotToken::new("123456789:ABCdefGHIjklMNOpqrsTUVwxyz").unwrap();
/// assert!(token.is_well_formed());
/// assert!(BotToken::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    /// Wrap a bot token, rejecting empty input.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MissingSecret`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, VerifyError> {
        let token = token.into();
        if token.is_empty() {
            return Err(VerifyError::MissingSecret);
        }
        Ok(Self(token))
    }

    /// Explicit access to the secret bytes.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Advisory check for the BotFather `digits:token` shape.
    ///
    /// Presence is the only hard requirement; this helper exists for hosts
    /// that want to validate a credential before wiring it into a workflow.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self.0.split_once(':') {
            Some((id, rest)) => {
                !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) && !rest.is_empty()
            }
            None => false,
        }
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}
