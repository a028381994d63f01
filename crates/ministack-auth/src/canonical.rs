//! Data-check-string construction.
//!
//! The platform signs a deterministic reconstruction of the payload: every
//! field except the signature rendered as `key=value`, sorted by field name,
//! joined with newlines. The reconstruction here must match the platform's
//! bit-for-bit; any deviation produces a signature mismatch indistinguishable
//! from forgery.

use std::collections::BTreeMap;

/// Build the data-check-string over the decoded fields.
///
/// Each field renders as `key=value` using the decoded key and value; lines
/// sort by field name in raw byte-wise lexicographic order (never
/// locale-aware collation), joined with a single newline and no trailing
/// delimiter. `BTreeMap` iteration supplies the required order directly.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use ministack_auth::build_data_check_string;
///
/// let fields = BTreeMap::from([
///     ("query_id".to_owned(), "test".to_owned()),
///     ("auth_date".to_owned(), "1662771648".to_owned()),
/// ]);
/// assert_eq!(
///     build_data_check_string(&fields),
///     "auth_date=1662771648\nquery_id=test"
/// );
/// ```
#[must_use]
pub fn build_data_check_string(fields: &BTreeMap<String, String>) -> String {
    let lines: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    lines.join("\n")
}
