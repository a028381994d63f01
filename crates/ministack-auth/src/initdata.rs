//! Init-data payload decoding.
//!
//! Parses the query-string-encoded payload handed to a mini-app by the host
//! client into its constituent fields, extracts the signature, and eagerly
//! decodes the nested `user` JSON claim. Decoding the claims here, before
//! signature verification, means malformed claims always surface as the
//! distinct [`VerifyError::MalformedClaims`] kind rather than as a generic
//! signature failure.

use std::collections::BTreeMap;

use ministack_model::TelegramUser;
use tracing::debug;

use crate::error::VerifyError;

/// The field name carrying the hex-encoded signature.
pub const HASH_FIELD: &str = "hash";

/// The decoded fields of an init-data payload, signature extracted.
#[derive(Debug, Clone)]
pub struct ParsedInitData {
    /// Decoded fields, keyed by field name, with the signature removed.
    ///
    /// `BTreeMap` iteration order is byte-wise lexicographic, which is
    /// exactly the order canonicalization needs.
    pub fields: BTreeMap<String, String>,
    /// The hex-encoded signature extracted from the `hash` field.
    pub hash: String,
    /// The decoded `user` claim, when the field was present.
    pub user: Option<TelegramUser>,
}

/// Decode an init-data payload into fields, signature, and user claims.
///
/// Decoding follows standard query-string rules: percent-decoding, `+` as
/// space, `&`-separated pairs, `=`-separated key/value. Pairs without `=`
/// become a field with an empty value; duplicate field names resolve
/// last-value-wins.
///
/// # Errors
///
/// - [`VerifyError::MissingPayload`] if the input is empty.
/// - [`VerifyError::MissingSignature`] if no `hash` field exists, or it has
///   an empty value.
/// - [`VerifyError::MalformedClaims`] if a `user` field is present but is not
///   valid JSON of the expected shape.
pub fn parse_init_data(init_data: &str) -> Result<ParsedInitData, VerifyError> {
    if init_data.is_empty() {
        return Err(VerifyError::MissingPayload);
    }

    let mut fields: BTreeMap<String, String> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(init_data.as_bytes()) {
        fields.insert(key.into_owned(), value.into_owned());
    }

    let hash = fields
        .remove(HASH_FIELD)
        .filter(|h| !h.is_empty())
        .ok_or(VerifyError::MissingSignature)?;

    debug!(field_count = fields.len(), "Parsed init-data fields");

    let user = match fields.get("user") {
        Some(raw) => Some(
            serde_json::from_str::<TelegramUser>(raw)
                .map_err(|_| VerifyError::MalformedClaims)?,
        ),
        None => None,
    };

    Ok(ParsedInitData { fields, hash, user })
}
