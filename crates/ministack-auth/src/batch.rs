//! Batch verification.
//!
//! Hosts often process a list of payloads in one go. Each entry is verified
//! independently; a rejection is captured in that entry's slot and never
//! short-circuits its siblings.

use ministack_model::AuthOutput;

use crate::config::VerifyConfig;
use crate::error::VerifyError;
use crate::token::BotToken;
use crate::verify::{VerifiedInitData, verify_init_data_at};

/// The outcome of one entry in a batch verification.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Position of the payload in the input list.
    pub item_index: usize,
    /// The entry's verification outcome.
    pub result: Result<VerifiedInitData, VerifyError>,
}

impl BatchItem {
    /// Render the downstream output record for this entry.
    ///
    /// A rejected entry renders as the soft-failure record carrying the
    /// rejection message; nothing panics or propagates.
    #[must_use]
    pub fn to_output(&self, config: &VerifyConfig) -> AuthOutput {
        match &self.result {
            Ok(verified) => verified.to_output(config),
            Err(err) => AuthOutput::failure(err.to_string()),
        }
    }
}

/// Verify a list of payloads independently, at an explicit `now`.
///
/// Returns one [`BatchItem`] per input, in input order. One failed entry
/// never disturbs sibling results.
#[must_use]
pub fn verify_batch_at(
    payloads: &[impl AsRef<str>],
    token: &BotToken,
    config: &VerifyConfig,
    now_unix: i64,
) -> Vec<BatchItem> {
    payloads
        .iter()
        .enumerate()
        .map(|(item_index, payload)| BatchItem {
            item_index,
            result: verify_init_data_at(payload.as_ref(), token, config, now_unix),
        })
        .collect()
}

/// Verify a list of payloads independently, sampling `now` once for the
/// whole batch.
#[must_use]
pub fn verify_batch(
    payloads: &[impl AsRef<str>],
    token: &BotToken,
    config: &VerifyConfig,
) -> Vec<BatchItem> {
    verify_batch_at(payloads, token, config, chrono::Utc::now().timestamp())
}
