//! Verification configuration.

/// Configuration for a verification call.
///
/// `max_age` bounds how old a payload's claimed issuance time may be. The two
/// `include_*` switches govern which extra fields are surfaced in the
/// downstream [`AuthOutput`](ministack_model::AuthOutput) record; they do not
/// change what the verifier computes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyConfig {
    /// Maximum acceptable payload age, in seconds.
    pub max_age: u64,
    /// Whether to surface the raw init-data string in the output record.
    pub include_raw_data: bool,
    /// Whether to surface the received signature in the output record.
    pub include_hash: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_age: 86_400,
            include_raw_data: false,
            include_hash: false,
        }
    }
}

impl VerifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `INITDATA_MAX_AGE`, `INITDATA_INCLUDE_RAW_DATA`, and
    /// `INITDATA_INCLUDE_HASH`; unset or unparsable variables leave the
    /// defaults in place.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("INITDATA_MAX_AGE") {
            if let Ok(max_age) = v.parse() {
                config.max_age = max_age;
            }
        }
        if let Ok(v) = std::env::var("INITDATA_INCLUDE_RAW_DATA") {
            config.include_raw_data = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Ok(v) = std::env::var("INITDATA_INCLUDE_HASH") {
            config.include_hash = v == "1" || v.eq_ignore_ascii_case("true");
        }

        config
    }
}
