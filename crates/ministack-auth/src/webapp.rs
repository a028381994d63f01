//! WebAppData keyed-hash signature verification.
//!
//! Telegram signs init-data with a two-stage HMAC-SHA256 chain:
//!
//! ```text
//! signing_key = HMAC-SHA256(key = "WebAppData", message = bot_token)
//! signature   = lowercase_hex(HMAC-SHA256(key = signing_key, message = data_check_string))
//! ```
//!
//! The verifier recomputes the signature and compares it to the received one
//! using constant-time comparison.

use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::VerifyError;
use crate::token::BotToken;

/// The fixed key of the first HMAC stage.
const WEBAPP_KEY: &[u8] = b"WebAppData";

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Derive the per-application signing key from a bot token.
#[must_use]
pub fn derive_signing_key(token: &BotToken) -> Vec<u8> {
    hmac_sha256(WEBAPP_KEY, token.expose().as_bytes())
}

/// Compute the hex-encoded HMAC-SHA256 signature of `data` under `signing_key`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Verify the received signature over a data-check-string.
///
/// The comparison is constant-time to avoid a timing side-channel. The
/// provided signature is not case-folded: an uppercase-hex signature
/// mismatches by construction.
///
/// # Errors
///
/// Returns [`VerifyError::SignatureInvalid`] on mismatch. The variant is
/// deliberately generic: wrong secret, tampered fields, and wrong
/// canonicalization are indistinguishable to the caller.
pub fn verify_signature(
    data_check_string: &str,
    provided: &str,
    token: &BotToken,
) -> Result<(), VerifyError> {
    let signing_key = derive_signing_key(token);
    let expected = compute_signature(&signing_key, data_check_string);

    debug!(
        data_check_len = data_check_string.len(),
        "Computed expected init-data signature"
    );

    if expected.as_bytes().ct_eq(provided.as_bytes()).into() {
        debug!("Init-data signature verification succeeded");
        Ok(())
    } else {
        debug!("Init-data signature mismatch");
        Err(VerifyError::SignatureInvalid)
    }
}
