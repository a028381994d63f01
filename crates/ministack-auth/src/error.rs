//! Error types for init-data verification.
//!
//! All verification failures are represented by [`VerifyError`], which provides
//! a specific variant for each rejection reason. Every variant is terminal for
//! a single call; none are transient, so none are retried.

/// Errors that can occur during init-data verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// No bot token was supplied (empty secret).
    #[error("Bot token is required")]
    MissingSecret,

    /// The init-data string is empty or absent.
    #[error("Init data is required")]
    MissingPayload,

    /// The payload lacks a `hash` field, or carries an empty one.
    #[error("Hash is missing from init-data")]
    MissingSignature,

    /// The computed signature does not match the provided one.
    ///
    /// Deliberately covers wrong secret, tampered fields, and wrong
    /// canonicalization alike, so callers get no distinguishing oracle.
    #[error("Invalid hash - init-data verification failed")]
    SignatureInvalid,

    /// The `user` field is invalid JSON, has the wrong shape, or is absent.
    #[error("Invalid user data format")]
    MalformedClaims,

    /// The payload lacks a non-empty `query_id` field.
    #[error("Query ID is missing from init-data")]
    MissingQueryId,

    /// The `auth_date` field is missing or not a base-10 integer.
    #[error("Invalid auth_date in init-data")]
    MalformedTimestamp,

    /// The payload's claimed issuance time exceeds the freshness bound.
    #[error("Init-data is too old (max age: {max_age} seconds)")]
    PayloadExpired {
        /// The freshness bound that was exceeded, in seconds.
        max_age: u64,
    },
}

impl VerifyError {
    /// Stable machine-readable code for this rejection kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSecret => "MissingSecret",
            Self::MissingPayload => "MissingPayload",
            Self::MissingSignature => "MissingSignature",
            Self::SignatureInvalid => "SignatureInvalid",
            Self::MalformedClaims => "MalformedClaims",
            Self::MissingQueryId => "MissingQueryId",
            Self::MalformedTimestamp => "MalformedTimestamp",
            Self::PayloadExpired { .. } => "PayloadExpired",
        }
    }
}
