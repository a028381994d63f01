//! The init-data verification pipeline.
//!
//! This module wires the stages together: decode the payload, rebuild the
//! data-check-string, verify the keyed-hash signature, check freshness, and
//! assemble the verified claims. The pipeline is strictly linear with early
//! exit on the first rejection; [`VerifiedInitData`] is constructible only by
//! running it, so callers cannot bypass verification.

use ministack_model::{AuthOutput, TelegramUser};
use tracing::debug;

use crate::canonical::build_data_check_string;
use crate::config::VerifyConfig;
use crate::error::VerifyError;
use crate::freshness::{check_freshness_at, parse_auth_date};
use crate::initdata::parse_init_data;
use crate::token::BotToken;
use crate::webapp::verify_signature;

/// The verified claims of an init-data payload.
///
/// Exists only as the output of [`verify_init_data`]; fields are private and
/// there is no public constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedInitData {
    query_id: String,
    user: TelegramUser,
    auth_date: i64,
    hash: String,
    raw_data: String,
}

impl VerifiedInitData {
    /// The `query_id` field of the payload.
    #[must_use]
    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    /// The verified user claims.
    #[must_use]
    pub fn user(&self) -> &TelegramUser {
        &self.user
    }

    /// Claimed issuance time, unix seconds.
    #[must_use]
    pub fn auth_date(&self) -> i64 {
        self.auth_date
    }

    /// The received signature that was verified.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The raw init-data string the claims were extracted from.
    #[must_use]
    pub fn raw_data(&self) -> &str {
        &self.raw_data
    }

    /// Render the downstream output record.
    ///
    /// The raw payload and signature are surfaced only when the
    /// corresponding [`VerifyConfig`] switches are on.
    #[must_use]
    pub fn to_output(&self, config: &VerifyConfig) -> AuthOutput {
        AuthOutput {
            verified: true,
            query_id: Some(self.query_id.clone()),
            user: Some(self.user.clone()),
            auth_date: Some(self.auth_date),
            user_id: Some(self.user.id),
            user_name: Some(self.user.full_name()),
            is_authenticated: true,
            raw_data: config.include_raw_data.then(|| self.raw_data.clone()),
            hash: config.include_hash.then(|| self.hash.clone()),
            error: None,
        }
    }
}

/// Verify an init-data payload at an explicit `now`, unix seconds.
///
/// Identical to [`verify_init_data`] except that the freshness sample is
/// supplied by the caller, which makes boundary conditions testable.
///
/// # Errors
///
/// Returns the first applicable [`VerifyError`]; see [`verify_init_data`].
pub fn verify_init_data_at(
    init_data: &str,
    token: &BotToken,
    config: &VerifyConfig,
    now_unix: i64,
) -> Result<VerifiedInitData, VerifyError> {
    let parsed = parse_init_data(init_data)?;

    let data_check_string = build_data_check_string(&parsed.fields);
    verify_signature(&data_check_string, &parsed.hash, token)?;

    let auth_date = parse_auth_date(&parsed.fields)?;
    check_freshness_at(auth_date, config.max_age, now_unix)?;

    let user = parsed.user.ok_or(VerifyError::MalformedClaims)?;

    let query_id = parsed
        .fields
        .get("query_id")
        .filter(|q| !q.is_empty())
        .cloned()
        .ok_or(VerifyError::MissingQueryId)?;

    debug!(query_id = %query_id, user_id = user.id, "Init-data verified");

    Ok(VerifiedInitData {
        query_id,
        user,
        auth_date,
        hash: parsed.hash,
        raw_data: init_data.to_owned(),
    })
}

/// Verify an init-data payload against a bot token.
///
/// Runs the full pipeline: decode, canonicalize, verify the two-stage
/// HMAC-SHA256 signature, check freshness against `config.max_age`, and
/// assemble the verified claims. Pure apart from a single clock sample;
/// concurrent calls share no state.
///
/// # Errors
///
/// Returns the first applicable [`VerifyError`]: a malformed or unsigned
/// payload rejects during decoding, a signature mismatch rejects as
/// [`VerifyError::SignatureInvalid`], a stale payload as
/// [`VerifyError::PayloadExpired`], and claims missing `user` or `query_id`
/// reject during assembly.
///
/// # Examples
///
/// ```
/// use ministack_auth::{BotToken, VerifyConfig, VerifyError, verify_init_data};
///
/// let token = BotToken::new("123456789:ABCdefGHIjklMNOpqrsTUVwxyz").unwrap();
/// let result = verify_init_data("query_id=test&auth_date=1", &token, &VerifyConfig::default());
/// assert_eq!(result.unwrap_err(), VerifyError::MissingSignature);
/// ```
pub fn verify_init_data(
    init_data: &str,
    token: &BotToken,
    config: &VerifyConfig,
) -> Result<VerifiedInitData, VerifyError> {
    verify_init_data_at(init_data, token, config, chrono::Utc::now().timestamp())
}
