//! Payload freshness checking.
//!
//! Rejects payloads whose claimed issuance time is older than the configured
//! bound. `now` is sampled once per verification call so a single call is
//! deterministic; [`check_freshness_at`] takes the sample explicitly for
//! deterministic tests.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::VerifyError;

/// Parse the `auth_date` field as a strict base-10 integer.
///
/// # Errors
///
/// Returns [`VerifyError::MalformedTimestamp`] if the field is absent, empty,
/// or not a base-10 integer.
pub fn parse_auth_date(fields: &BTreeMap<String, String>) -> Result<i64, VerifyError> {
    fields
        .get("auth_date")
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or(VerifyError::MalformedTimestamp)
}

/// Check a claimed issuance time against the freshness bound, at `now`.
///
/// The boundary is inclusive: a payload aged exactly `max_age` seconds is
/// accepted. A future-dated `auth_date` is accepted silently; skewed client
/// clocks are observable via the debug log without a behavior change.
///
/// # Errors
///
/// Returns [`VerifyError::PayloadExpired`] when `now - auth_date > max_age`.
pub fn check_freshness_at(auth_date: i64, max_age: u64, now: i64) -> Result<(), VerifyError> {
    let age = now.saturating_sub(auth_date);

    if age < 0 {
        debug!(auth_date, now, "Future-dated auth_date accepted");
        return Ok(());
    }

    if age > i64::try_from(max_age).unwrap_or(i64::MAX) {
        debug!(age, max_age, "Init-data exceeded freshness bound");
        return Err(VerifyError::PayloadExpired { max_age });
    }

    Ok(())
}

/// Check a claimed issuance time against the freshness bound, sampling `now`
/// from the system clock.
///
/// # Errors
///
/// Returns [`VerifyError::PayloadExpired`] when the payload is too old.
pub fn check_freshness(auth_date: i64, max_age: u64) -> Result<(), VerifyError> {
    check_freshness_at(auth_date, max_age, chrono::Utc::now().timestamp())
}
